//! Commands of the Search module (`FT.*`).

use super::IntoCmd;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Numeric,
    Tag,
}

impl FieldType {
    fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "TEXT",
            FieldType::Numeric => "NUMERIC",
            FieldType::Tag => "TAG",
        }
    }
}

/// One attribute of an index schema.
///
/// For JSON indexes the identifier is a JSONPath such as `$.name`, and the
/// alias is what queries refer to (`@name`).
#[derive(Debug, Clone)]
pub struct Field {
    identifier: String,
    alias: Option<String>,
    kind: FieldType,
    sortable: bool,
    /// Only meaningful for `TAG` fields.
    separator: Option<char>,
}

impl Field {
    fn new(identifier: impl ToString, kind: FieldType) -> Self {
        Self {
            identifier: identifier.to_string(),
            alias: None,
            kind,
            sortable: false,
            separator: None,
        }
    }

    pub fn text(identifier: impl ToString) -> Self {
        Self::new(identifier, FieldType::Text)
    }

    pub fn numeric(identifier: impl ToString) -> Self {
        Self::new(identifier, FieldType::Numeric)
    }

    pub fn tag(identifier: impl ToString) -> Self {
        Self::new(identifier, FieldType::Tag)
    }

    pub fn as_name(mut self, alias: impl ToString) -> Self {
        self.alias = Some(alias.to_string());
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn separator(mut self, separator: char) -> Self {
        self.separator = Some(separator);
        self
    }

    fn push_args(&self, args: &mut Vec<String>) {
        args.push(self.identifier.clone());
        if let Some(alias) = &self.alias {
            args.push("AS".to_string());
            args.push(alias.clone());
        }
        args.push(self.kind.as_str().to_string());
        if let (FieldType::Tag, Some(separator)) = (self.kind, self.separator) {
            args.push("SEPARATOR".to_string());
            args.push(separator.to_string());
        }
        if self.sortable {
            args.push("SORTABLE".to_string());
        }
    }
}

/// Which kind of key an index covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOn {
    Hash,
    Json,
}

/// `FT.CREATE index ON HASH|JSON [PREFIX n prefix ...] SCHEMA field ...`
#[derive(Debug, Clone)]
pub struct FtCreateCmd {
    index: String,
    on: IndexOn,
    prefixes: Vec<String>,
    schema: Vec<Field>,
}

impl FtCreateCmd {
    pub fn new(index: impl ToString, on: IndexOn) -> Self {
        Self {
            index: index.to_string(),
            on,
            prefixes: Vec::new(),
            schema: Vec::new(),
        }
    }

    pub fn prefix(mut self, prefix: impl ToString) -> Self {
        self.prefixes.push(prefix.to_string());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.schema.push(field);
        self
    }
}

impl IntoCmd for FtCreateCmd {
    fn args(&self) -> Vec<String> {
        let mut args = vec![
            "FT.CREATE".to_string(),
            self.index.clone(),
            "ON".to_string(),
            match self.on {
                IndexOn::Hash => "HASH".to_string(),
                IndexOn::Json => "JSON".to_string(),
            },
        ];
        if !self.prefixes.is_empty() {
            args.push("PREFIX".to_string());
            args.push(self.prefixes.len().to_string());
            args.extend(self.prefixes.iter().cloned());
        }
        args.push("SCHEMA".to_string());
        for field in &self.schema {
            field.push_args(&mut args);
        }
        args
    }
}

/// `FT.SEARCH index query [FILTER ...] [RETURN n field ...] [LIMIT offset num]`
#[derive(Debug, Clone)]
pub struct FtSearchCmd {
    index: String,
    query: String,
    /// `(field, min, max)`; bounds are strings so `(18` and `+inf` work.
    filters: Vec<(String, String, String)>,
    return_fields: Vec<String>,
    limit: Option<(usize, usize)>,
}

impl FtSearchCmd {
    pub fn new(index: impl ToString, query: impl ToString) -> Self {
        Self {
            index: index.to_string(),
            query: query.to_string(),
            filters: Vec::new(),
            return_fields: Vec::new(),
            limit: None,
        }
    }

    pub fn filter(mut self, field: impl ToString, min: impl ToString, max: impl ToString) -> Self {
        self.filters
            .push((field.to_string(), min.to_string(), max.to_string()));
        self
    }

    pub fn return_field(mut self, field: impl ToString) -> Self {
        self.return_fields.push(field.to_string());
        self
    }

    pub fn limit(mut self, offset: usize, num: usize) -> Self {
        self.limit = Some((offset, num));
        self
    }
}

impl IntoCmd for FtSearchCmd {
    fn args(&self) -> Vec<String> {
        let mut args = vec![
            "FT.SEARCH".to_string(),
            self.index.clone(),
            self.query.clone(),
        ];
        for (field, min, max) in &self.filters {
            args.extend([
                "FILTER".to_string(),
                field.clone(),
                min.clone(),
                max.clone(),
            ]);
        }
        if !self.return_fields.is_empty() {
            args.push("RETURN".to_string());
            args.push(self.return_fields.len().to_string());
            args.extend(self.return_fields.iter().cloned());
        }
        if let Some((offset, num)) = self.limit {
            args.extend(["LIMIT".to_string(), offset.to_string(), num.to_string()]);
        }
        args
    }
}

/// A `REDUCE` clause inside `GROUPBY`.
#[derive(Debug, Clone)]
pub enum Reducer {
    Count { alias: String },
    CountDistinct { property: String, alias: String },
    Sum { property: String, alias: String },
    ToList { property: String, alias: String },
}

impl Reducer {
    pub fn count(alias: impl ToString) -> Self {
        Reducer::Count {
            alias: alias.to_string(),
        }
    }

    pub fn count_distinct(property: impl ToString, alias: impl ToString) -> Self {
        Reducer::CountDistinct {
            property: property.to_string(),
            alias: alias.to_string(),
        }
    }

    pub fn sum(property: impl ToString, alias: impl ToString) -> Self {
        Reducer::Sum {
            property: property.to_string(),
            alias: alias.to_string(),
        }
    }

    pub fn to_list(property: impl ToString, alias: impl ToString) -> Self {
        Reducer::ToList {
            property: property.to_string(),
            alias: alias.to_string(),
        }
    }

    fn push_args(&self, args: &mut Vec<String>) {
        args.push("REDUCE".to_string());
        let (function, property, alias) = match self {
            Reducer::Count { alias } => ("COUNT", None, alias),
            Reducer::CountDistinct { property, alias } => ("COUNT_DISTINCT", Some(property), alias),
            Reducer::Sum { property, alias } => ("SUM", Some(property), alias),
            Reducer::ToList { property, alias } => ("TOLIST", Some(property), alias),
        };
        args.push(function.to_string());
        match property {
            Some(property) => {
                args.push("1".to_string());
                args.push(property.clone());
            }
            None => args.push("0".to_string()),
        }
        args.push("AS".to_string());
        args.push(alias.clone());
    }
}

/// One step of an aggregation pipeline. Steps run in the order given.
#[derive(Debug, Clone)]
pub enum Step {
    GroupBy {
        properties: Vec<String>,
        reducers: Vec<Reducer>,
    },
    SortBy {
        properties: Vec<String>,
    },
    Limit {
        offset: usize,
        num: usize,
    },
}

impl Step {
    fn push_args(&self, args: &mut Vec<String>) {
        match self {
            Step::GroupBy {
                properties,
                reducers,
            } => {
                args.push("GROUPBY".to_string());
                args.push(properties.len().to_string());
                args.extend(properties.iter().cloned());
                for reducer in reducers {
                    reducer.push_args(args);
                }
            }
            Step::SortBy { properties } => {
                args.push("SORTBY".to_string());
                args.push(properties.len().to_string());
                args.extend(properties.iter().cloned());
            }
            Step::Limit { offset, num } => {
                args.extend(["LIMIT".to_string(), offset.to_string(), num.to_string()]);
            }
        }
    }
}

/// `FT.AGGREGATE index query [step ...]`
#[derive(Debug, Clone)]
pub struct FtAggregateCmd {
    index: String,
    query: String,
    steps: Vec<Step>,
}

impl FtAggregateCmd {
    pub fn new(index: impl ToString, query: impl ToString) -> Self {
        Self {
            index: index.to_string(),
            query: query.to_string(),
            steps: Vec::new(),
        }
    }

    pub fn group_by<P: ToString>(
        mut self,
        properties: impl IntoIterator<Item = P>,
        reducers: impl IntoIterator<Item = Reducer>,
    ) -> Self {
        self.steps.push(Step::GroupBy {
            properties: properties.into_iter().map(|p| p.to_string()).collect(),
            reducers: reducers.into_iter().collect(),
        });
        self
    }

    pub fn sort_by<P: ToString>(mut self, properties: impl IntoIterator<Item = P>) -> Self {
        self.steps.push(Step::SortBy {
            properties: properties.into_iter().map(|p| p.to_string()).collect(),
        });
        self
    }

    pub fn limit(mut self, offset: usize, num: usize) -> Self {
        self.steps.push(Step::Limit { offset, num });
        self
    }
}

impl IntoCmd for FtAggregateCmd {
    fn args(&self) -> Vec<String> {
        let mut args = vec![
            "FT.AGGREGATE".to_string(),
            self.index.clone(),
            self.query.clone(),
        ];
        for step in &self.steps {
            step.push_args(&mut args);
        }
        args
    }
}

/// `FT.DROPINDEX index [DD]`
///
/// With `DD` the indexed documents are deleted as well.
#[derive(Debug, Clone)]
pub struct FtDropIndexCmd {
    index: String,
    delete_docs: bool,
}

impl FtDropIndexCmd {
    pub fn new(index: impl ToString) -> Self {
        Self {
            index: index.to_string(),
            delete_docs: false,
        }
    }

    pub fn delete_docs(mut self) -> Self {
        self.delete_docs = true;
        self
    }
}

impl IntoCmd for FtDropIndexCmd {
    fn args(&self) -> Vec<String> {
        let mut args = vec!["FT.DROPINDEX".to_string(), self.index.clone()];
        if self.delete_docs {
            args.push("DD".to_string());
        }
        args
    }
}

/// `FT.INFO index`
#[derive(Debug, Clone)]
pub struct FtInfoCmd {
    index: String,
}

impl FtInfoCmd {
    pub fn new(index: impl ToString) -> Self {
        Self {
            index: index.to_string(),
        }
    }
}

impl IntoCmd for FtInfoCmd {
    fn args(&self) -> Vec<String> {
        vec!["FT.INFO".to_string(), self.index.clone()]
    }
}

/// `FT._LIST`
#[derive(Debug, Clone, Default)]
pub struct FtListCmd;

impl IntoCmd for FtListCmd {
    fn args(&self) -> Vec<String> {
        vec!["FT._LIST".to_string()]
    }
}
