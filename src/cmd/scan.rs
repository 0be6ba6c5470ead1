use super::IntoCmd;

/// `SCAN cursor [MATCH pattern] [COUNT count] [TYPE type]`
///
/// The reply is `(next_cursor, keys)`; a full iteration ends when the server
/// hands back cursor `0`. `COUNT` is a hint, so a page may hold more or fewer
/// keys, including none at all.
#[derive(Debug, Clone, Default)]
pub struct ScanCmd {
    cursor: u64,
    pattern: Option<String>,
    count: Option<usize>,
    kind: Option<String>,
}

impl ScanCmd {
    pub fn new(cursor: u64) -> Self {
        Self {
            cursor,
            ..Self::default()
        }
    }

    pub fn pattern(mut self, pattern: impl ToString) -> Self {
        self.pattern = Some(pattern.to_string());
        self
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Only return keys holding this type, e.g. `string` or `hash`.
    pub fn kind(mut self, kind: impl ToString) -> Self {
        self.kind = Some(kind.to_string());
        self
    }

    /// The same options, continuing from `cursor`.
    pub fn at(&self, cursor: u64) -> Self {
        Self {
            cursor,
            ..self.clone()
        }
    }
}

impl IntoCmd for ScanCmd {
    fn args(&self) -> Vec<String> {
        let mut args = vec!["SCAN".to_string(), self.cursor.to_string()];
        if let Some(pattern) = &self.pattern {
            args.push("MATCH".to_string());
            args.push(pattern.clone());
        }
        if let Some(count) = self.count {
            args.push("COUNT".to_string());
            args.push(count.to_string());
        }
        if let Some(kind) = &self.kind {
            args.push("TYPE".to_string());
            args.push(kind.clone());
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_args() {
        assert_eq!(ScanCmd::new(0).args(), vec!["SCAN", "0"]);

        let cmd = ScanCmd::new(0).pattern("my*").count(2).kind("string");
        assert_eq!(
            cmd.args(),
            vec!["SCAN", "0", "MATCH", "my*", "COUNT", "2", "TYPE", "string"]
        );
        assert_eq!(
            cmd.at(12).args(),
            vec!["SCAN", "12", "MATCH", "my*", "COUNT", "2", "TYPE", "string"]
        );
    }
}
