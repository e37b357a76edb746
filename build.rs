const EMAILJS_VARS: [&str; 3] = [
    "EMAILJS_SERVICE_ID",
    "EMAILJS_TEMPLATE_ID",
    "EMAILJS_PUBLIC_KEY",
];

fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();

    // Also set as environment variable for use in env! macro
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // EmailJS settings are public browser values, so they are baked into the
    // bundle. A .env file next to Cargo.toml is honored but the real
    // environment wins.
    let _ = dotenvy::dotenv();
    for var in EMAILJS_VARS {
        if let Ok(value) = std::env::var(var) {
            println!("cargo:rustc-env={}={}", var, value);
        }
        println!("cargo:rerun-if-env-changed={}", var);
    }

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
}
