fn main() {
    ppm2png_bin::main();
}
