//! Positional call shorthand mapped onto named options.
//!
//! `alert("Hi")`, `alert("Hi", callback)` and `alert(options)` all end up as a
//! [`DialogOptions`] value; the mapping decides by arity and by the kind of the
//! first argument.

use crate::callback::{Reply, ReplyCallback};
use crate::config::DialogOptions;
use crate::error::{Error, Result};
use crate::types::Outcome;

/// One positional argument of a shorthand call.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Text(String),
    Callback(ReplyCallback),
    Options(DialogOptions),
}

impl From<&str> for Argument {
    fn from(text: &str) -> Self {
        Argument::Text(text.to_string())
    }
}

impl From<String> for Argument {
    fn from(text: String) -> Self {
        Argument::Text(text)
    }
}

impl From<ReplyCallback> for Argument {
    fn from(callback: ReplyCallback) -> Self {
        Argument::Callback(callback)
    }
}

impl From<DialogOptions> for Argument {
    fn from(options: DialogOptions) -> Self {
        Argument::Options(options)
    }
}

/// Option a positional argument is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Message,
    Title,
    Callback,
}

/// Anything an entry point accepts as its arguments.
pub trait IntoArguments {
    fn into_arguments(self) -> Vec<Argument>;
}

impl IntoArguments for Vec<Argument> {
    fn into_arguments(self) -> Vec<Argument> {
        self
    }
}

impl IntoArguments for &str {
    fn into_arguments(self) -> Vec<Argument> {
        vec![self.into()]
    }
}

impl IntoArguments for String {
    fn into_arguments(self) -> Vec<Argument> {
        vec![self.into()]
    }
}

impl IntoArguments for DialogOptions {
    fn into_arguments(self) -> Vec<Argument> {
        vec![self.into()]
    }
}

impl<S, F> IntoArguments for (S, F)
where
    S: Into<String>,
    F: Fn(Reply) -> Outcome + 'static,
{
    fn into_arguments(self) -> Vec<Argument> {
        let (text, callback) = self;
        vec![Argument::Text(text.into()), Argument::Callback(ReplyCallback::new(callback))]
    }
}

/// Maps one or two positional arguments onto `properties`.
///
/// A lone options argument is returned as is. Two arguments, or a lone text,
/// are assigned in order to the given properties.
pub fn map_arguments(args: Vec<Argument>, properties: [Property; 2]) -> Result<DialogOptions> {
    let count = args.len();
    if !(1..=2).contains(&count) {
        return Err(Error::InvalidArgumentCountError { count });
    }

    let mut options = DialogOptions::default();
    for (index, argument) in args.into_iter().enumerate() {
        match argument {
            Argument::Options(given) if count == 1 => return Ok(given),
            Argument::Callback(_) if count == 1 => return Err(Error::MissingOptionsError),
            argument => assign(&mut options, properties[index], argument)?,
        }
    }

    Ok(options)
}

fn assign(options: &mut DialogOptions, property: Property, argument: Argument) -> Result<()> {
    match (property, argument) {
        (Property::Message, Argument::Text(text)) => options.message = Some(text.into()),
        (Property::Title, Argument::Text(text)) => options.title = Some(text),
        (Property::Callback, Argument::Callback(callback)) => options.callback = Some(callback),
        (property, argument) => {
            return Err(Error::InvalidArgumentError(format!(
                "cannot use {argument:?} as the {property:?} argument"
            )))
        }
    }
    Ok(())
}
