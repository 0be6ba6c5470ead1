use redis::Value;

use super::Parse;
use crate::{Error, TourResult};

/// One library from the `FUNCTION LIST` reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryInfo {
    pub name: String,
    pub engine: String,
    /// Names of the functions the library registered.
    pub functions: Vec<String>,
}

impl LibraryInfo {
    /// Decode every library of a `FUNCTION LIST` reply.
    pub fn all_from_value(value: Value) -> TourResult<Vec<Self>> {
        let mut parse = Parse::new(value)?;
        let mut libraries = Vec::new();
        while !parse.is_empty() {
            libraries.push(Self::from_library(parse.next_array()?)?);
        }
        Ok(libraries)
    }

    /// Decode the first library of a `FUNCTION LIST` reply.
    pub fn from_value(value: Value) -> TourResult<Self> {
        Self::all_from_value(value)?
            .into_iter()
            .next()
            .ok_or_else(|| Error::UnexpectedReply("no library loaded".to_string()))
    }

    fn from_library(mut parse: Parse) -> TourResult<Self> {
        let mut name = None;
        let mut engine = None;
        let mut functions = Vec::new();

        while !parse.is_empty() {
            let key = parse.next_string()?;
            match &key[..] {
                "library_name" => name = Some(parse.next_string()?),
                "engine" => engine = Some(parse.next_string()?),
                "functions" => {
                    let mut list = parse.next_array()?;
                    while !list.is_empty() {
                        functions.push(function_name(list.next_array()?)?);
                    }
                }
                _ => {
                    parse.next_value()?;
                }
            }
        }

        Ok(LibraryInfo {
            name: name.ok_or_else(|| Error::UnexpectedReply("library without a name".into()))?,
            engine: engine.unwrap_or_default(),
            functions,
        })
    }
}

fn function_name(mut parse: Parse) -> TourResult<String> {
    while !parse.is_empty() {
        let key = parse.next_string()?;
        if key == "name" {
            return parse.next_string();
        }
        parse.next_value()?;
    }
    Err(Error::UnexpectedReply("function without a name".into()))
}
