use std::fs::File;
use std::io::BufReader;

use bpmn_counter::{describe, Inspector, Vocabulary};
use tracing_subscriber::EnvFilter;

/// A collaboration between a customer and a shop
struct OrderCollaboration;
describe!(OrderCollaboration {
    Pool {
        ProcessID: nested,
        CustomerID: nested,
        ShopID: nested,
        IsExecutable: leaf,
    },
    Message {
        OrderMessage: nested,
    },
    Process {
        StartEvent: nested,
        ReceiveOrderReceiveTask: nested,
        PaymentReceivedExclusiveGateway: nested,
        ShipOrderTask: nested,
        FromStartEvent: nested,
        FromReceiveOrderReceiveTask: nested,
        FromPaymentReceivedExclusiveGateway: nested,
        FromShipOrderTask: nested,
        EndEvent: nested,
    },
});

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // An optional vocabulary file may be given on the command line
    let vocabulary = match std::env::args().nth(1) {
        Some(path) => Vocabulary::from_reader(File::open(path).map(BufReader::new)?)?,
        None => Vocabulary::default(),
    };

    let inspector = Inspector::new(vocabulary)?;
    let tally = inspector.tally(&OrderCollaboration)?;

    // Print the report, then the same tally as JSON
    println!("{}", tally);
    println!("{}", serde_json::to_string_pretty(&tally)?);

    Ok(())
}
