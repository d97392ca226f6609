fn main() {
    #[cfg(target_arch = "wasm32")]
    medialens_frontend::mount();
}
