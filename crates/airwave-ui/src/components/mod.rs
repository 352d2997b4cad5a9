pub(crate) mod daisy;
pub(crate) mod locale_menu;
pub(crate) mod settings_frame;
pub(crate) mod toast;
