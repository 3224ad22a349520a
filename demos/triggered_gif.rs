use some_random_api::SraClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = SraClient::new();
    let gif = client
        .triggered("https://github.githubassets.com/images/modules/logos_page/GitHub-Mark.png")
        .await?;

    std::fs::write("triggered.gif", &gif)?;
    println!("wrote triggered.gif ({} bytes)", gif.len());
    Ok(())
}
