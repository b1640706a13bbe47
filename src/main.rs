use orbitfield::Galaxy;

fn main() {
    if let Err(e) = Galaxy::new().run() {
        eprintln!("orbitfield: {}", e);
        std::process::exit(1);
    }
}
