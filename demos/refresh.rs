use multiroom::{device::MultiRoomDevice, throttle::Throttle, Config, Error, MediaPlayer};
use std::env;
use tokio::time::{sleep, Duration};

#[tokio::main]
async fn main() -> Result<(), Error> {
    simple_logger::init_with_level(log::Level::Debug).unwrap();

    let host = env::args().nth(1).unwrap_or_else(|| "192.168.1.20".into());
    let config = Config::new(host);
    let mut device = MultiRoomDevice::new(&config)?.with_refresh_policy(Throttle::default());

    for _ in 0..3 {
        device.update().await;
        println!("{} is {}", device.name(), device.state());
        println!("- source: {:?}", device.source());
        println!("- volume: {:.2} (muted: {})", device.volume_level(), device.is_volume_muted());
        if let Some(title) = device.media_title() {
            println!("- playing: {}", title);
        }
        sleep(Duration::from_secs(10)).await;
    }

    Ok(())
}
