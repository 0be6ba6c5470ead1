//! Server-side functions: `FUNCTION LOAD`, `FUNCTION LIST` and `FCALL`.

use super::IntoCmd;

/// `FUNCTION LOAD [REPLACE] code`
///
/// The code must start with a shebang naming the engine and the library,
/// e.g. `#!lua name=mylib`. The reply is the library name.
#[derive(Debug, Clone)]
pub struct FunctionLoadCmd {
    code: String,
    replace: bool,
}

impl FunctionLoadCmd {
    pub fn new(code: impl ToString) -> Self {
        Self {
            code: code.to_string(),
            replace: false,
        }
    }

    /// Overwrite a library with the same name instead of failing.
    pub fn replace(mut self) -> Self {
        self.replace = true;
        self
    }
}

impl IntoCmd for FunctionLoadCmd {
    fn args(&self) -> Vec<String> {
        let mut args = vec!["FUNCTION".to_string(), "LOAD".to_string()];
        if self.replace {
            args.push("REPLACE".to_string());
        }
        args.push(self.code.clone());
        args
    }
}

/// `FUNCTION LIST [LIBRARYNAME pattern] [WITHCODE]`
#[derive(Debug, Clone, Default)]
pub struct FunctionListCmd {
    library: Option<String>,
    with_code: bool,
}

impl FunctionListCmd {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn library(mut self, pattern: impl ToString) -> Self {
        self.library = Some(pattern.to_string());
        self
    }

    pub fn with_code(mut self) -> Self {
        self.with_code = true;
        self
    }
}

impl IntoCmd for FunctionListCmd {
    fn args(&self) -> Vec<String> {
        let mut args = vec!["FUNCTION".to_string(), "LIST".to_string()];
        if let Some(library) = &self.library {
            args.push("LIBRARYNAME".to_string());
            args.push(library.clone());
        }
        if self.with_code {
            args.push("WITHCODE".to_string());
        }
        args
    }
}

/// `FCALL function numkeys [key ...] [arg ...]`
#[derive(Debug, Clone)]
pub struct FCallCmd {
    function: String,
    keys: Vec<String>,
    args: Vec<String>,
}

impl FCallCmd {
    pub fn new(function: impl ToString) -> Self {
        Self {
            function: function.to_string(),
            keys: Vec::new(),
            args: Vec::new(),
        }
    }

    pub fn key(mut self, key: impl ToString) -> Self {
        self.keys.push(key.to_string());
        self
    }

    pub fn arg(mut self, arg: impl ToString) -> Self {
        self.args.push(arg.to_string());
        self
    }
}

impl IntoCmd for FCallCmd {
    fn args(&self) -> Vec<String> {
        let mut args = vec![
            "FCALL".to_string(),
            self.function.clone(),
            self.keys.len().to_string(),
        ];
        args.extend(self.keys.iter().cloned());
        args.extend(self.args.iter().cloned());
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_load() {
        let code = "#!lua name=lib\nredis.register_function('f', function() return 1 end)";
        assert_eq!(
            FunctionLoadCmd::new(code).args(),
            vec!["FUNCTION", "LOAD", code]
        );
        assert_eq!(
            FunctionLoadCmd::new(code).replace().args(),
            vec!["FUNCTION", "LOAD", "REPLACE", code]
        );
    }

    #[test]
    fn test_function_list() {
        assert_eq!(FunctionListCmd::new().args(), vec!["FUNCTION", "LIST"]);
        assert_eq!(
            FunctionListCmd::new().library("cheatsheet").with_code().args(),
            vec!["FUNCTION", "LIST", "LIBRARYNAME", "cheatsheet", "WITHCODE"]
        );
    }

    #[test]
    fn test_fcall_counts_keys() {
        assert_eq!(
            FCallCmd::new("hello").arg(r#"{"name":"Nicol"}"#).args(),
            vec!["FCALL", "hello", "0", r#"{"name":"Nicol"}"#]
        );
        assert_eq!(
            FCallCmd::new("touch").key("a").key("b").arg("1").args(),
            vec!["FCALL", "touch", "2", "a", "b", "1"]
        );
    }
}
