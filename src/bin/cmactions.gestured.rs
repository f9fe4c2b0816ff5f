use touchscreen_gesture_sync::{logging, service, Config};

// gesture mode service
fn main() {
    let config = Config::from_props();
    logging::init(config.debug);
    service::run(&config);
}
