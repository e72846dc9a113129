fn main() {
    synergy::run();
}
