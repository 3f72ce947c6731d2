use super::LoxValue;

pub trait ValueFormatter {
    fn format(&self, value: &LoxValue) -> String;
}

pub struct BasicFormatter;

impl ValueFormatter for BasicFormatter {
    fn format(&self, value: &LoxValue) -> String {
        format!("{value}")
    }
}
