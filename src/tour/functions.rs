use serde_json::json;

use super::{exec, fetch};
use crate::{
    cmd::{FCallCmd, FunctionListCmd, FunctionLoadCmd},
    reply::LibraryInfo,
    IntoCmd, Session, TourResult,
};

pub const LIBRARY: &str = "cheatsheet";

/// Lua library registering `hello`, which greets the `name` of the JSON
/// object passed as its first argument.
pub const LIBRARY_CODE: &str = r#"#!lua name=cheatsheet
redis.register_function('hello', function(keys, args)
  local person = cjson.decode(args[1])
  return 'Hello ' .. person.name
end)"#;

#[tracing::instrument(skip_all)]
pub async fn run(session: &mut Session) -> TourResult<()> {
    // FUNCTION LOAD [REPLACE] code
    // Replies with the library name. O(1)
    let _: String = exec(session, FunctionLoadCmd::new(LIBRARY_CODE).replace()).await?; // "cheatsheet"

    // FUNCTION LIST [LIBRARYNAME pattern] [WITHCODE]
    let list = FunctionListCmd::new().library(LIBRARY);
    let label = list.label();
    let library = LibraryInfo::from_value(fetch(session, list).await?)?;
    session.record(label, &library); // LibraryInfo { name: "cheatsheet", engine: "LUA", functions: ["hello"] }

    // FCALL function numkeys [key ...] [arg ...]
    let person = json!({ "name": "Nicol" });
    let _: String = exec(session, FCallCmd::new("hello").arg(person)).await?; // "Hello Nicol"

    Ok(())
}
