pub(crate) mod atoms;
pub(crate) mod daisy;
pub(crate) mod page;
pub(crate) mod shell;
pub(crate) mod toast;
