fn main() {
    pixmorph_bin::main();
}
