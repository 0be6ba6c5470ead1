use serde_json::json;

use super::{exec, fetch};
use crate::{
    cmd::{
        JsonArrAppendCmd, JsonArrIndexCmd, JsonArrInsertCmd, JsonGetCmd, JsonNumIncrByCmd,
        JsonObjKeysCmd, JsonObjLenCmd, JsonSetCmd,
    },
    IntoCmd, Session, TourResult,
};

const KEY: &str = "employee_profile:1";

#[tracing::instrument(skip_all)]
pub async fn run(session: &mut Session) -> TourResult<()> {
    // JSON.SET key path value
    // O(M+N), M and N being the sizes of the old and new values.
    let _: String = exec(session, JsonSetCmd::new(KEY, ".", &json!({ "name": "Alice" }))?).await?; // "OK"

    // JSON.GET key [path [path ...]]
    // The reply is the serialized document.
    let get = JsonGetCmd::new(KEY);
    let label = get.label();
    let raw: String = fetch(session, get).await?;
    let document: serde_json::Value = serde_json::from_str(&raw)?;
    session.record(label, &document.to_string()); // "{\"name\":\"Alice\"}"

    // JSON.NUMINCRBY key path number
    let _: String = exec(session, JsonSetCmd::new(KEY, ".age", &30)?).await?;
    let _: String = exec(session, JsonNumIncrByCmd::new(KEY, ".age", 5.0)).await?; // "35"

    // JSON.OBJKEYS key [path]
    let _: Vec<String> = exec(session, JsonObjKeysCmd::new(KEY).path(".")).await?; // ["name", "age"]

    // JSON.OBJLEN key [path]
    let _: i64 = exec(session, JsonObjLenCmd::new(KEY).path(".")).await?; // 2

    // JSON.ARRAPPEND key [path] value [value ...]
    // Replies with the new length of the array.
    let _: String = exec(
        session,
        JsonSetCmd::new(KEY, ".colors", &["red", "green", "blue"])?,
    )
    .await?;
    let _: i64 = exec(
        session,
        JsonArrAppendCmd::new(KEY, ".colors").value("yellow")?,
    )
    .await?; // 4

    // JSON.ARRINSERT key path index value [value ...]
    // Inserts before `index`, shifting the rest to the right.
    let _: i64 = exec(
        session,
        JsonArrInsertCmd::new(KEY, ".colors", 2).value("purple")?,
    )
    .await?; // 5

    // JSON.ARRINDEX key path value [start [stop]]
    // -1 when the value is not found.
    let _: i64 = exec(session, JsonArrIndexCmd::new(KEY, ".colors", "purple")?).await?; // 2

    // A JSONPath answers with one index per matching array.
    let _: Vec<i64> = exec(session, JsonArrIndexCmd::new(KEY, "$.colors", "black")?).await?; // [-1]

    Ok(())
}
