pub fn run() -> anyhow::Result<()> {
    println!("burnlog {}", env!("CARGO_PKG_VERSION"));
    println!("Terminal fitness tracker with calorie estimation");
    Ok(())
}
