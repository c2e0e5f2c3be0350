//! Contribution calendar on a 53 × 11 WS2812 panel, one column per week.
//!
//! Wiring: panel data on GP16 (chain snakes down columns), buttons to GND on GP0 and GP1
//! (refresh), GP2 (brighter) and GP3 (dimmer). Credentials as in `strip_calendar`.
#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

#[path = "sample_source.rs"]
mod sample_source;

use contrib_glow::board::{EmbassyClock, Ws2812PanelSink, button};
use contrib_glow::button::{ButtonInputs, PressedTo};
use contrib_glow::config::{BoardProfile, Secrets};
use contrib_glow::frame::PanelWiring;
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

const PANEL_LEN: usize = 53 * 11;

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
    let driver: PioWs2812<'_, PIO0, 0, PANEL_LEN, Grb> =
        PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_16, &program);
    let sink: Ws2812PanelSink<'_, PIO0, 0, 53, 11, PANEL_LEN, Grb> = Ws2812PanelSink::new(
        driver,
        PanelWiring::SerpentineColumnMajor,
        Current::Milliamps(1500),
    );

    let inputs = ButtonInputs::new(
        [
            button(p.PIN_0, PressedTo::Ground),
            button(p.PIN_1, PressedTo::Ground),
        ],
        button(p.PIN_2, PressedTo::Ground),
        button(p.PIN_3, PressedTo::Ground),
    );

    let profile = BoardProfile::galactic_unicorn().unwrap_or_else(|err| panic!("{err}"));
    let mut scheduler = RefreshScheduler::new(
        profile,
        SECRETS,
        SampleSource::new(0x39d3_53),
        inputs,
        sink,
        EmbassyClock,
    );

    scheduler.show_boot().await;
    // The sample source works offline, so there is no connection to report.

    let Err(err) = scheduler.run().await;
    scheduler.halt(err).await
}
