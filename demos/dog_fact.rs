use some_random_api::SraClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    some_random_api::logger::init_logger();

    let client = SraClient::new();
    let dog = client.dog().await?;

    println!("{}", dog.fact);
    println!("{}", dog.image);
    Ok(())
}
