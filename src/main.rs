use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use emnist_json::{convert, ConvertConfig, DatasetSplit, JsonLayout, DEFAULT_MAX_COUNT};
use std::path::PathBuf;
use std::process;

fn build_cli() -> Command {
    Command::new("emnist_json")
        .version(env!("CARGO_PKG_VERSION"))
        .about("EMNIST/MNIST IDX 바이너리를 JSON 레코드 배열로 변환")
        .arg(
            Arg::new("images")
                .long("images")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("이미지 IDX 파일 (16바이트 헤더 + 784바이트 이미지들)")
        )
        .arg(
            Arg::new("labels")
                .long("labels")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("라벨 IDX 파일 (8바이트 헤더 + 이미지당 1바이트)")
        )
        .arg(
            Arg::new("mapping")
                .long("mapping")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("라벨 → 문자 매핑 파일 (줄마다 '<라벨> <코드포인트>')")
        )
        .arg(
            Arg::new("out")
                .long("out")
                .short('o')
                .value_name("FILE")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("출력 JSON 파일")
        )
        .arg(
            Arg::new("count")
                .long("count")
                .short('n')
                .value_name("COUNT")
                .value_parser(value_parser!(usize))
                .help(format!("변환할 최대 이미지 수 (기본값 {})", DEFAULT_MAX_COUNT))
        )
        .arg(
            Arg::new("dataset-dir")
                .long("dataset-dir")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .help("EMNIST balanced 파일이 있는 디렉토리 (지정하지 않은 경로를 채움)")
        )
        .arg(
            Arg::new("split")
                .long("split")
                .value_name("SPLIT")
                .value_parser(value_parser!(DatasetSplit))
                .default_value("train")
                .help("--dataset-dir 사용 시 train 또는 test")
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .action(ArgAction::SetTrue)
                .help("들여쓰기된 JSON 출력")
        )
        .arg(
            Arg::new("no-progress")
                .long("no-progress")
                .action(ArgAction::SetTrue)
                .help("진행 표시줄 숨김")
        )
}

fn config_from_matches(matches: &ArgMatches) -> Result<ConvertConfig, String> {
    let preset = matches.get_one::<PathBuf>("dataset-dir").map(|dir| {
        let split = matches
            .get_one::<DatasetSplit>("split")
            .copied()
            .unwrap_or(DatasetSplit::Train);
        ConvertConfig::balanced(dir, split)
    });

    let images = matches
        .get_one::<PathBuf>("images")
        .cloned()
        .or_else(|| preset.as_ref().map(|p| p.images_path.clone()))
        .ok_or("--images 또는 --dataset-dir가 필요합니다")?;
    let labels = matches
        .get_one::<PathBuf>("labels")
        .cloned()
        .or_else(|| preset.as_ref().map(|p| p.labels_path.clone()))
        .ok_or("--labels 또는 --dataset-dir가 필요합니다")?;
    let mapping = matches
        .get_one::<PathBuf>("mapping")
        .cloned()
        .or_else(|| preset.as_ref().and_then(|p| p.mapping_path.clone()));
    let out = matches
        .get_one::<PathBuf>("out")
        .cloned()
        .ok_or("--out이 필요합니다")?;
    let count = matches
        .get_one::<usize>("count")
        .copied()
        .unwrap_or(DEFAULT_MAX_COUNT);

    let mut config = ConvertConfig::new(images, labels, out)
        .with_max_count(count)
        .with_progress(!matches.get_flag("no-progress"));
    if let Some(mapping) = mapping {
        config = config.with_mapping(mapping);
    }
    if matches.get_flag("pretty") {
        config = config.with_layout(JsonLayout::Pretty);
    }
    Ok(config)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = build_cli().get_matches();
    let config = match config_from_matches(&matches) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("❌ {}", message);
            process::exit(2);
        }
    };

    println!("\n{}개 이미지를 바이너리 파일에서 JSON으로 변환", config.max_count);
    match convert(&config) {
        Ok(report) => report.print_summary(),
        Err(e) => {
            eprintln!("❌ 변환 실패: {:#}", e);
            process::exit(1);
        }
    }
}
