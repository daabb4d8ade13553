//! # Example: healing
//!
//! Demonstrates how a [`Steward`] restarts a ward that stops pulsing, and how stewards
//! nest: an outer steward guards an inner steward, which guards an irresponsible ward that
//! never pulses at all.
//!
//! ## Flow
//! ```text
//! outer steward (timeout 4s)
//!   └─► inner steward (timeout 2s)
//!         ├─► publish(WardStarting, attempt=1)
//!         ├─► irresponsible ward: "I'm not doing anything", then silence
//!         ├─► 2s without a pulse ─► publish(HeartbeatMissed), cancel ward
//!         ├─► publish(WardStarting, attempt=2)
//!         └─► ... until Ctrl-C or the 9s window closes
//! ```
//!
//! The inner steward keeps pulsing on its own, so the outer steward never restarts it.
//!
//! ## Run
//! ```bash
//! cargo run --example healing --features logging
//! ```

use std::sync::Arc;
use std::time::Duration;

use steward::{
    Bus, CancelSignal, CancelTrigger, LogWriter, Steward, Subscribe, SubscriberSet, Ward, WardFn,
    cancel, cancel_on_shutdown, heartbeat,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Event bus with the stdout logger attached
    let bus = Bus::new(256);
    let stop_logging = CancelTrigger::new();
    let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(LogWriter)];
    let listener = SubscriberSet::listen(subs, &bus, stop_logging.signal());

    // 2. A ward that announces itself and then never pulses
    let irresponsible = WardFn::new("irresponsible", |cancel: CancelSignal, _: Duration| {
        let (outlet, streams) = heartbeat::channel::<()>(cancel.clone(), 1);
        tokio::spawn(async move {
            println!("[irresponsible] I'm not doing anything.");
            cancel.fired().await;
            println!("[irresponsible] halting.");
            drop(outlet);
        });
        streams
    });

    // 3. Inner steward heals the ward, outer steward watches the inner one
    let inner = Steward::builder(irresponsible)
        .name("inner")
        .timeout(Duration::from_secs(2))
        .bus(bus.clone())
        .build()?;
    let outer = Steward::builder(inner)
        .name("outer")
        .timeout(Duration::from_secs(4))
        .bus(bus.clone())
        .build()?;

    // 4. Run until Ctrl-C or for 9 seconds, whichever comes first
    let parent = cancel::or([
        cancel_on_shutdown(Some(bus.clone()))?,
        CancelSignal::after(Duration::from_secs(9)),
    ]);
    let mut streams = outer.start(parent, Duration::from_secs(1));

    let mut pulses = 0u32;
    while streams.pulses.recv().await.is_some() {
        pulses += 1;
    }
    println!("[main] outer steward stopped after {pulses} pulses.");

    // 5. Flush the logger
    stop_logging.fire();
    listener.await?.shutdown().await;
    Ok(())
}
