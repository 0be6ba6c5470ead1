use serde::Serialize;
use tracing::warn;

use super::{exec, fetch};
use crate::{
    cmd::{
        Field, FtAggregateCmd, FtCreateCmd, FtDropIndexCmd, FtInfoCmd, FtListCmd, FtSearchCmd,
        IndexOn, JsonSetCmd, Reducer,
    },
    reply::{AggregateResult, IndexInfo, SearchResult},
    IntoCmd, Session, TourResult,
};

pub const STAFF_INDEX: &str = "staff:index";
pub const STAFF_PREFIX: &str = "staff:";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub name: String,
    pub age: u32,
    pub is_single: bool,
    pub skills: Vec<String>,
}

impl StaffMember {
    fn new(name: &str, age: u32, is_single: bool, skills: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            age,
            is_single,
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The documents the index is queried against, keyed by their id.
pub fn staff() -> Vec<(String, StaffMember)> {
    vec![
        (
            format!("{STAFF_PREFIX}1"),
            StaffMember::new("Bob", 22, true, &["NodeJS", "MongoDB", "React"]),
        ),
        (
            format!("{STAFF_PREFIX}2"),
            StaffMember::new("Alex", 45, true, &["Python", "MySQL", "Angular"]),
        ),
    ]
}

/// Queries shown against the staff index.
pub const QUERIES: [&str; 4] = [
    // everything
    "*",
    // name == 'alex'
    "(@name:'alex')",
    // isSingle == true && age > 18
    "( (@isSingle:{true}) (@age:[(18 +inf]) )",
    "(@skills:{NodeJS})",
];

#[tracing::instrument(skip_all)]
pub async fn run(session: &mut Session) -> TourResult<()> {
    drop_index(session, STAFF_INDEX).await?;

    // FT.CREATE index [ON HASH | JSON] [PREFIX n prefix ...] SCHEMA field type ...
    // O(K) in the number of fields, plus O(N) in the keyspace for the
    // initial scan.
    let create = FtCreateCmd::new(STAFF_INDEX, IndexOn::Json)
        .prefix(STAFF_PREFIX)
        .field(Field::text("$.name").as_name("name").sortable())
        .field(Field::numeric("$.age").as_name("age").sortable())
        .field(Field::tag("$.isSingle").as_name("isSingle"))
        .field(
            Field::tag(r#"$["skills"][*]"#)
                .as_name("skills")
                .separator('|'),
        );
    let _: String = exec(session, create).await?; // "OK"

    for (key, member) in staff() {
        let _: String = exec(session, JsonSetCmd::new(key, ".", &member)?).await?;
    }

    // FT.SEARCH index query
    // O(N)
    for query in QUERIES {
        let search = FtSearchCmd::new(STAFF_INDEX, query)
            .return_field("name")
            .return_field("age")
            .return_field("isSingle")
            .limit(0, 10);
        // (@name:'alex') -> SearchResult { total: 1, documents: [Document { id: "staff:2", .. }] }
        search_and_record(session, search).await?;
    }

    let search = FtSearchCmd::new(STAFF_INDEX, "*")
        .filter("age", 30, 50)
        .return_field("name");
    search_and_record(session, search).await?;

    // FT.AGGREGATE index query [GROUPBY ...] [SORTBY ...] [LIMIT ...]
    let aggregate = FtAggregateCmd::new(STAFF_INDEX, "(@age:[(10 +inf])")
        .group_by(["@age"], [Reducer::count("userCount")])
        .sort_by(["@age"])
        .limit(0, 10);
    aggregate_and_record(session, aggregate).await?;
    // AggregateResult { total: 2, rows: [{"age": "22", "userCount": "1"}, {"age": "45", "userCount": "1"}] }

    let aggregate = FtAggregateCmd::new(STAFF_INDEX, "*")
        .group_by(["@isSingle"], [Reducer::to_list("@name", "names")]);
    aggregate_and_record(session, aggregate).await?;

    // FT.INFO index
    // O(1)
    let info = FtInfoCmd::new(STAFF_INDEX);
    let label = info.label();
    let info = IndexInfo::from_value(fetch(session, info).await?)?;
    session.record(label, &info);

    // FT._LIST
    let list = FtListCmd;
    let label = list.label();
    let mut indexes: Vec<String> = fetch(session, list).await?;
    indexes.sort();
    session.record(label, &indexes);

    Ok(())
}

/// `FT.DROPINDEX`, tolerating an index that does not exist yet.
///
/// Any other failure is returned.
pub async fn drop_index(session: &mut Session, index: &str) -> TourResult<()> {
    let cmd = FtDropIndexCmd::new(index);
    let label = cmd.label();
    match fetch::<_, String>(session, cmd).await {
        Ok(reply) => session.record(label, &reply),
        Err(err) if err.is_unknown_index() => {
            warn!(index, %err, "no index to drop");
            session.record(label, "(no such index)");
        }
        Err(err) => return Err(err),
    }
    Ok(())
}

async fn search_and_record(session: &mut Session, search: FtSearchCmd) -> TourResult<SearchResult> {
    let label = search.label();
    let result = SearchResult::from_value(fetch(session, search).await?)?;
    session.record(label, &result);
    Ok(result)
}

async fn aggregate_and_record(
    session: &mut Session,
    aggregate: FtAggregateCmd,
) -> TourResult<AggregateResult> {
    let label = aggregate.label();
    let result = AggregateResult::from_value(fetch(session, aggregate).await?)?;
    session.record(label, &result);
    Ok(result)
}
