// Stamps the compile date into BUILD_DATE, shown by `shapekit --version`.
fn main() {
    let build_date = chrono::Utc::now().format("%Y-%m-%d").to_string();
    println!("cargo:rustc-env=BUILD_DATE={build_date}");
}
