fn main() {
    if let Err(err) = act_machines::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
