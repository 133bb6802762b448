use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("wordlens")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Wordlens Contributors")
        .about("Rank and chart the keywords of a web page")
        .arg(
            clap::arg!(--font <FILE> "Font file used for chart labels")
                .default_value("SimHei.ttf")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::Arg::new("output_dir")
                .long("output-dir")
                .value_name("DIR")
                .help("Directory saved page text is written to")
                .default_value("output_files")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::Arg::new("chart_dir")
                .long("chart-dir")
                .value_name("DIR")
                .help("Directory rendered charts are written to")
                .default_value("charts")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(
            clap::Arg::new("user_agent")
                .long("user-agent")
                .value_name("UA")
                .help("Custom User-Agent for HTTP requests"),
        )
        .arg(
            clap::arg!(--tokenizer <NAME> "Word segmenter")
                .default_value("jieba")
                .value_parser(["jieba", "unicode"]),
        )
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "wordlens", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "wordlens", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "wordlens", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "wordlens", &completions_dir).unwrap();
}
