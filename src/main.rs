fn main() {
    srpn::term::main();
}
