use redis::{
    streams::{StreamMaxlen, StreamRangeReply, StreamReadOptions, StreamReadReply},
    AsyncCommands,
};

use crate::{reply::StreamEntry, Session, TourResult};

const KEY: &str = "myStream";

#[tracing::instrument(skip_all)]
pub async fn run(session: &mut Session) -> TourResult<()> {
    // XADD key id field value [field value ...]
    // `*` lets the server pick the id. O(1)
    let id: String = session
        .connection()
        .xadd(KEY, "*", &[("sensorId", "1234"), ("temperature", "19.8")])
        .await?;
    session.record(format!("XADD {KEY} * sensorId 1234 temperature 19.8"), &id); // "1518951480106-0"

    // XREAD [COUNT count] [BLOCK milliseconds] STREAMS key [key ...] id [id ...]
    // Only entries with an id greater than the given one are returned.
    // Blocks up to 5 seconds when there are none.
    let options = StreamReadOptions::default().count(2).block(5000);
    let reply: StreamReadReply = session
        .connection()
        .xread_options(&[KEY], &["0"], &options)
        .await?;
    let streams = reply
        .keys
        .iter()
        .map(|stream| -> TourResult<(String, Vec<StreamEntry>)> {
            let entries = stream
                .ids
                .iter()
                .map(StreamEntry::from_stream_id)
                .collect::<TourResult<Vec<_>>>()?;
            Ok((stream.key.clone(), entries))
        })
        .collect::<TourResult<Vec<_>>>()?;
    session.record(format!("XREAD COUNT 2 BLOCK 5000 STREAMS {KEY} 0"), &streams);

    // XRANGE key start end [COUNT count]
    let reply: StreamRangeReply = session.connection().xrange(KEY, &id, &id).await?;
    let entries = reply
        .ids
        .iter()
        .map(StreamEntry::from_stream_id)
        .collect::<TourResult<Vec<_>>>()?;
    session.record(format!("XRANGE {KEY} {id} {id}"), &entries);

    // XLEN key
    let reply: i64 = session.connection().xlen(KEY).await?;
    session.record(format!("XLEN {KEY}"), &reply); // 1

    // XDEL key id [id ...]
    let reply: i64 = session.connection().xdel(KEY, &[&id]).await?;
    session.record(format!("XDEL {KEY} {id}"), &reply); // 1

    // XTRIM key MAXLEN count
    // Replies with the number of evicted entries.
    let reply: i64 = session
        .connection()
        .xtrim(KEY, StreamMaxlen::Equals(0))
        .await?;
    session.record(format!("XTRIM {KEY} MAXLEN 0"), &reply); // 0

    Ok(())
}
