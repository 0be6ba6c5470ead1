use clap::Parser;
use redis_tour::{tour, Category, Config, Session};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Same flags and environment as the binary, `REDIS_URL` included.
    let config = Config::parse();
    let mut session = Session::connect(&config).await?.quiet();

    tour::run_category(&mut session, Category::Strings).await?;

    let transcript = session.close();
    println!(
        "got this from server: result={:?}",
        transcript.reply("GET myKey")
    );

    Ok(())
}
