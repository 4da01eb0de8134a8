fn main() {
    // Compile Slint UI files
    #[cfg(feature = "gui")]
    slint_build::compile("ui/main.slint").unwrap();
}
