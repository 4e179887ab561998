fn main() {
    uniffi::generate_scaffolding("src/diveunits.udl").unwrap();
}
