//! Contribution calendar on a 320-pixel WS2812 strip folded into 8 rows of 40.
//!
//! Wiring: strip data on GP18, buttons to GND on GP10/GP11 (refresh), GP12 (brighter) and
//! GP13 (dimmer). Credentials come from the `WIFI_SSID`, `WIFI_PASSWORD`, `GH_USER` and
//! `GH_TOKEN` environment variables at build time; leaving one out shows the matching error.
#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

#[path = "sample_source.rs"]
mod sample_source;

use contrib_glow::board::{EmbassyClock, Ws2812StripSink, button};
use contrib_glow::button::{ButtonInputs, PressedTo};
use contrib_glow::config::{BoardProfile, Secrets};
use contrib_glow::power::Current;
use contrib_glow::refresh::RefreshScheduler;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{InterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{Grb, PioWs2812, PioWs2812Program};
use sample_source::SampleSource;
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
});

const SECRETS: Secrets<'static> = Secrets {
    ssid: match option_env!("WIFI_SSID") {
        Some(value) => value,
        None => "",
    },
    password: match option_env!("WIFI_PASSWORD") {
        Some(value) => value,
        None => "",
    },
    gh_user: match option_env!("GH_USER") {
        Some(value) => value,
        None => "",
    },
    gh_token: match option_env!("GH_TOKEN") {
        Some(value) => value,
        None => "",
    },
};

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    let p = embassy_rp::init(Default::default());

    let Pio { mut common, sm0, .. } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let driver: PioWs2812<'_, PIO0, 0, 320, Grb> =
        PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_18, &program);
    let sink = Ws2812StripSink::new(driver, Current::Milliamps(1000));

    let inputs = ButtonInputs::new(
        [
            button(p.PIN_10, PressedTo::Ground),
            button(p.PIN_11, PressedTo::Ground),
        ],
        button(p.PIN_12, PressedTo::Ground),
        button(p.PIN_13, PressedTo::Ground),
    );

    let profile = BoardProfile::bling().unwrap_or_else(|err| panic!("{err}"));
    let mut scheduler = RefreshScheduler::new(
        profile,
        SECRETS,
        SampleSource::new(0x5339_d3),
        inputs,
        sink,
        EmbassyClock,
    );

    scheduler.show_boot().await;
    // The sample source works offline, so there is no connection to report.

    let Err(err) = scheduler.run().await;
    scheduler.halt(err).await
}
