use tftp_probe::codec::{OPCODE_ERROR, error_code_name};
use tftp_probe::{Exchange, ProbeConfig, RequestPacket, Result};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let default_path = "probe_config.json".to_string();
    let config_path = if args.len() > 1 { &args[1] } else { &default_path };

    let config = ProbeConfig::load(config_path)?;
    let peer = config.peer_addr()?;
    let request = RequestPacket::new(config.opcode, &config.filename, &config.mode)?;

    println!(
        "Probing {} (opcode {}, file {:?}, mode {:?})",
        peer, config.opcode, config.filename, config.mode
    );

    let exchange = Exchange::udp()?;
    let outcome = exchange.run(peer, &request, config.max_reply_size)?;

    println!(
        "Reply: {} bytes from {}",
        outcome.bytes_received, outcome.from
    );
    println!("  opcode: {}", outcome.header.opcode);
    if outcome.header.opcode == OPCODE_ERROR {
        println!(
            "  error code: {} ({})",
            outcome.header.code,
            error_code_name(outcome.header.code)
        );
    } else {
        println!("  code: {}", outcome.header.code);
    }
    match std::str::from_utf8(&outcome.header.remainder) {
        Ok(text) => println!("  remainder: {text:?}"),
        Err(_) => println!("  remainder: {:?}", outcome.header.remainder),
    }

    Ok(())
}
