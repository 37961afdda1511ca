use shadow_rs::ShadowBuilder;

fn main() {
    // Generate build metadata for the version string shown by the CLI
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}
