//! Typed builders for the commands the client library has no dedicated API
//! for: the JSON and Search modules, server-side functions, and `SCAN` with
//! all of its options.

use serde::Serialize;

use crate::TourResult;

pub mod function;
pub use function::{FCallCmd, FunctionListCmd, FunctionLoadCmd};

pub mod json;
pub use json::{
    JsonArrAppendCmd, JsonArrIndexCmd, JsonArrInsertCmd, JsonGetCmd, JsonNumIncrByCmd,
    JsonObjKeysCmd, JsonObjLenCmd, JsonSetCmd,
};

pub mod scan;
pub use scan::ScanCmd;

pub mod search;
pub use search::{
    Field, FieldType, FtAggregateCmd, FtCreateCmd, FtDropIndexCmd, FtInfoCmd, FtListCmd,
    FtSearchCmd, IndexOn, Reducer, Step,
};

/// A command that renders itself as a list of arguments.
///
/// The first argument is always the command name.
pub trait IntoCmd {
    fn args(&self) -> Vec<String>;

    fn into_cmd(self) -> redis::Cmd
    where
        Self: Sized,
    {
        let mut cmd = redis::Cmd::new();
        for arg in self.args() {
            cmd.arg(arg);
        }
        cmd
    }

    /// The command as it would be typed into `redis-cli`.
    fn label(&self) -> String {
        self.args()
            .iter()
            .map(|arg| quote(arg))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn quote(arg: &str) -> String {
    if arg.is_empty() || arg.contains(char::is_whitespace) || arg.contains('"') {
        format!("{arg:?}")
    } else {
        arg.to_string()
    }
}

/// Serialize `value` the way the JSON module expects its arguments.
pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> TourResult<String> {
    Ok(serde_json::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoCmd(Vec<&'static str>);

    impl IntoCmd for EchoCmd {
        fn args(&self) -> Vec<String> {
            self.0.iter().map(|s| s.to_string()).collect()
        }
    }

    #[test]
    fn test_label_quotes_when_needed() {
        let cmd = EchoCmd(vec!["FT.SEARCH", "staff:index", "(@name:'alex')"]);
        assert_eq!(cmd.label(), "FT.SEARCH staff:index (@name:'alex')");

        let cmd = EchoCmd(vec!["FT.SEARCH", "staff:index", "(@a:{x}) (@b:{y})"]);
        assert_eq!(cmd.label(), r#"FT.SEARCH staff:index "(@a:{x}) (@b:{y})""#);

        let cmd = EchoCmd(vec!["JSON.SET", "k", ".", r#"{"name":"Alice"}"#]);
        assert_eq!(cmd.label(), r#"JSON.SET k . "{\"name\":\"Alice\"}""#);

        let cmd = EchoCmd(vec!["SET", "k", ""]);
        assert_eq!(cmd.label(), r#"SET k """#);
    }

    #[test]
    fn test_to_json() {
        assert_eq!(to_json("yellow").unwrap(), r#""yellow""#);
        assert_eq!(to_json(&["red", "green"]).unwrap(), r#"["red","green"]"#);
        assert_eq!(to_json(&30).unwrap(), "30");
    }
}
