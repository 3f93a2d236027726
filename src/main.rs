use playlist_top5::{
    config::AppConfig,
    ui::app::App,
    util::{hook::set_panic_hook, log::initialize_logging},
};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> color_eyre::Result<()> {
    setup()?;

    let config = AppConfig::load()?;
    let mut app = App::new(&config)?;
    app.run().await
}

fn setup() -> color_eyre::Result<()> {
    set_panic_hook()?;
    dotenv::dotenv().ok();
    initialize_logging()
}
