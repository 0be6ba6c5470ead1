//! Commands of the JSON module.
//!
//! Paths may use either the legacy syntax (`.`, `.age`) or JSONPath (`$`,
//! `$.age`). The server answers legacy paths with a single value and JSONPath
//! with an array holding one value per match.

use serde::Serialize;

use super::{to_json, IntoCmd};
use crate::TourResult;

/// Only set the value if the path does (`Xx`) or does not (`Nx`) exist yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetCondition {
    Nx,
    Xx,
}

/// `JSON.SET key path value [NX | XX]`
#[derive(Debug, Clone)]
pub struct JsonSetCmd {
    key: String,
    path: String,
    value: String,
    condition: Option<SetCondition>,
}

impl JsonSetCmd {
    pub fn new<T: Serialize + ?Sized>(
        key: impl ToString,
        path: impl ToString,
        value: &T,
    ) -> TourResult<Self> {
        Ok(Self {
            key: key.to_string(),
            path: path.to_string(),
            value: to_json(value)?,
            condition: None,
        })
    }

    pub fn condition(mut self, condition: SetCondition) -> Self {
        self.condition = Some(condition);
        self
    }
}

impl IntoCmd for JsonSetCmd {
    fn args(&self) -> Vec<String> {
        let mut args = vec![
            "JSON.SET".to_string(),
            self.key.clone(),
            self.path.clone(),
            self.value.clone(),
        ];
        match self.condition {
            Some(SetCondition::Nx) => args.push("NX".to_string()),
            Some(SetCondition::Xx) => args.push("XX".to_string()),
            None => {}
        }
        args
    }
}

/// `JSON.GET key [path [path ...]]`
///
/// Without a path the whole document is returned.
#[derive(Debug, Clone)]
pub struct JsonGetCmd {
    key: String,
    paths: Vec<String>,
}

impl JsonGetCmd {
    pub fn new(key: impl ToString) -> Self {
        Self {
            key: key.to_string(),
            paths: Vec::new(),
        }
    }

    pub fn path(mut self, path: impl ToString) -> Self {
        self.paths.push(path.to_string());
        self
    }
}

impl IntoCmd for JsonGetCmd {
    fn args(&self) -> Vec<String> {
        let mut args = vec!["JSON.GET".to_string(), self.key.clone()];
        args.extend(self.paths.iter().cloned());
        args
    }
}

/// `JSON.NUMINCRBY key path value`
#[derive(Debug, Clone)]
pub struct JsonNumIncrByCmd {
    key: String,
    path: String,
    by: f64,
}

impl JsonNumIncrByCmd {
    pub fn new(key: impl ToString, path: impl ToString, by: f64) -> Self {
        Self {
            key: key.to_string(),
            path: path.to_string(),
            by,
        }
    }
}

impl IntoCmd for JsonNumIncrByCmd {
    fn args(&self) -> Vec<String> {
        vec![
            "JSON.NUMINCRBY".to_string(),
            self.key.clone(),
            self.path.clone(),
            self.by.to_string(),
        ]
    }
}

/// `JSON.OBJKEYS key [path]`
#[derive(Debug, Clone)]
pub struct JsonObjKeysCmd {
    key: String,
    path: Option<String>,
}

impl JsonObjKeysCmd {
    pub fn new(key: impl ToString) -> Self {
        Self {
            key: key.to_string(),
            path: None,
        }
    }

    pub fn path(mut self, path: impl ToString) -> Self {
        self.path = Some(path.to_string());
        self
    }
}

impl IntoCmd for JsonObjKeysCmd {
    fn args(&self) -> Vec<String> {
        let mut args = vec!["JSON.OBJKEYS".to_string(), self.key.clone()];
        args.extend(self.path.clone());
        args
    }
}

/// `JSON.OBJLEN key [path]`
#[derive(Debug, Clone)]
pub struct JsonObjLenCmd {
    key: String,
    path: Option<String>,
}

impl JsonObjLenCmd {
    pub fn new(key: impl ToString) -> Self {
        Self {
            key: key.to_string(),
            path: None,
        }
    }

    pub fn path(mut self, path: impl ToString) -> Self {
        self.path = Some(path.to_string());
        self
    }
}

impl IntoCmd for JsonObjLenCmd {
    fn args(&self) -> Vec<String> {
        let mut args = vec!["JSON.OBJLEN".to_string(), self.key.clone()];
        args.extend(self.path.clone());
        args
    }
}

/// `JSON.ARRAPPEND key path value [value ...]`
#[derive(Debug, Clone)]
pub struct JsonArrAppendCmd {
    key: String,
    path: String,
    values: Vec<String>,
}

impl JsonArrAppendCmd {
    pub fn new(key: impl ToString, path: impl ToString) -> Self {
        Self {
            key: key.to_string(),
            path: path.to_string(),
            values: Vec::new(),
        }
    }

    pub fn value<T: Serialize + ?Sized>(mut self, value: &T) -> TourResult<Self> {
        self.values.push(to_json(value)?);
        Ok(self)
    }
}

impl IntoCmd for JsonArrAppendCmd {
    fn args(&self) -> Vec<String> {
        let mut args = vec![
            "JSON.ARRAPPEND".to_string(),
            self.key.clone(),
            self.path.clone(),
        ];
        args.extend(self.values.iter().cloned());
        args
    }
}

/// `JSON.ARRINSERT key path index value [value ...]`
///
/// Values are inserted before `index`; negative indexes count from the end.
#[derive(Debug, Clone)]
pub struct JsonArrInsertCmd {
    key: String,
    path: String,
    index: i64,
    values: Vec<String>,
}

impl JsonArrInsertCmd {
    pub fn new(key: impl ToString, path: impl ToString, index: i64) -> Self {
        Self {
            key: key.to_string(),
            path: path.to_string(),
            index,
            values: Vec::new(),
        }
    }

    pub fn value<T: Serialize + ?Sized>(mut self, value: &T) -> TourResult<Self> {
        self.values.push(to_json(value)?);
        Ok(self)
    }
}

impl IntoCmd for JsonArrInsertCmd {
    fn args(&self) -> Vec<String> {
        let mut args = vec![
            "JSON.ARRINSERT".to_string(),
            self.key.clone(),
            self.path.clone(),
            self.index.to_string(),
        ];
        args.extend(self.values.iter().cloned());
        args
    }
}

/// `JSON.ARRINDEX key path value [start [stop]]`
#[derive(Debug, Clone)]
pub struct JsonArrIndexCmd {
    key: String,
    path: String,
    value: String,
    start: Option<i64>,
    stop: Option<i64>,
}

impl JsonArrIndexCmd {
    pub fn new<T: Serialize + ?Sized>(
        key: impl ToString,
        path: impl ToString,
        value: &T,
    ) -> TourResult<Self> {
        Ok(Self {
            key: key.to_string(),
            path: path.to_string(),
            value: to_json(value)?,
            start: None,
            stop: None,
        })
    }

    /// Restrict the search to `start..stop`. `stop` is only sent along with
    /// a `start`, as the command requires.
    pub fn range(mut self, start: i64, stop: Option<i64>) -> Self {
        self.start = Some(start);
        self.stop = stop;
        self
    }
}

impl IntoCmd for JsonArrIndexCmd {
    fn args(&self) -> Vec<String> {
        let mut args = vec![
            "JSON.ARRINDEX".to_string(),
            self.key.clone(),
            self.path.clone(),
            self.value.clone(),
        ];
        if let Some(start) = self.start {
            args.push(start.to_string());
            args.extend(self.stop.map(|stop| stop.to_string()));
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_json_set() {
        let cmd = JsonSetCmd::new("employee_profile:1", ".", &json!({ "name": "Alice" })).unwrap();
        assert_eq!(
            cmd.args(),
            vec!["JSON.SET", "employee_profile:1", ".", r#"{"name":"Alice"}"#]
        );

        let cmd = JsonSetCmd::new("employee_profile:1", "$.age", &30)
            .unwrap()
            .condition(SetCondition::Nx);
        assert_eq!(
            cmd.args(),
            vec!["JSON.SET", "employee_profile:1", "$.age", "30", "NX"]
        );
    }

    #[test]
    fn test_json_get_paths() {
        assert_eq!(JsonGetCmd::new("k").args(), vec!["JSON.GET", "k"]);
        assert_eq!(
            JsonGetCmd::new("k").path("$.name").path("$.age").args(),
            vec!["JSON.GET", "k", "$.name", "$.age"]
        );
    }

    #[test]
    fn test_num_incr_by_renders_integers_without_fraction() {
        assert_eq!(
            JsonNumIncrByCmd::new("k", ".age", 5.0).args(),
            vec!["JSON.NUMINCRBY", "k", ".age", "5"]
        );
        assert_eq!(
            JsonNumIncrByCmd::new("k", ".age", 0.5).args(),
            vec!["JSON.NUMINCRBY", "k", ".age", "0.5"]
        );
    }

    #[test]
    fn test_obj_keys_and_len() {
        assert_eq!(JsonObjKeysCmd::new("k").args(), vec!["JSON.OBJKEYS", "k"]);
        assert_eq!(
            JsonObjLenCmd::new("k").path("$").args(),
            vec!["JSON.OBJLEN", "k", "$"]
        );
    }

    #[test]
    fn test_array_commands_encode_values_as_json() {
        let cmd = JsonArrAppendCmd::new("k", ".colors")
            .value("yellow")
            .unwrap()
            .value(&1)
            .unwrap();
        assert_eq!(
            cmd.args(),
            vec!["JSON.ARRAPPEND", "k", ".colors", r#""yellow""#, "1"]
        );

        let cmd = JsonArrInsertCmd::new("k", ".colors", 2)
            .value("purple")
            .unwrap();
        assert_eq!(
            cmd.args(),
            vec!["JSON.ARRINSERT", "k", ".colors", "2", r#""purple""#]
        );
    }

    #[test]
    fn test_arr_index_range() {
        let cmd = JsonArrIndexCmd::new("k", "$.colors", "purple").unwrap();
        assert_eq!(
            cmd.args(),
            vec!["JSON.ARRINDEX", "k", "$.colors", r#""purple""#]
        );
        let cmd = cmd.range(1, Some(-1));
        assert_eq!(
            cmd.args(),
            vec!["JSON.ARRINDEX", "k", "$.colors", r#""purple""#, "1", "-1"]
        );
        let cmd = JsonArrIndexCmd::new("k", "$.colors", "purple")
            .unwrap()
            .range(3, None);
        assert_eq!(
            cmd.args(),
            vec!["JSON.ARRINDEX", "k", "$.colors", r#""purple""#, "3"]
        );
    }
}
