pub(crate) mod button;
pub(crate) mod input;
pub(crate) mod select;
pub(crate) mod toggle;

pub(crate) use button::Button;
pub(crate) use input::Input;
pub(crate) use select::Select;
pub(crate) use toggle::Toggle;
