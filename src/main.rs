use screenplay_parser::{ParserConf, ScreenplayParser};
use log::{error, info};
use std::env;
use std::fs;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: {} <script_file> [conf.json]", args[0]);
        return ExitCode::FAILURE;
    }

    let file_path = &args[1];

    let conf = match args.get(2) {
        Some(conf_path) => match ParserConf::load(conf_path) {
            Ok(conf) => conf,
            Err(e) => {
                error!("读取配置失败: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => ParserConf::default(),
    };

    let content = match fs::read_to_string(file_path) {
        Ok(content) => content,
        Err(e) => {
            error!("读取文件失败: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let parser = ScreenplayParser::with_conf(conf);
    let script = match parser.parse(&content) {
        Ok(script) => script,
        Err(e) => {
            error!("解析失败: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("解析完成！");
    println!("标题: {}", script.title);
    println!("元素数量: {}", script.elements.len());
    println!("角色数量: {}", script.characters().len());

    let json = match serde_json::to_string_pretty(&script) {
        Ok(json) => json,
        Err(e) => {
            error!("序列化失败: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let json_path = format!("{}.json", file_path);
    if let Err(e) = fs::write(&json_path, json) {
        error!("写入文件失败: {}", e);
        return ExitCode::FAILURE;
    }
    info!("JSON输出已保存到: {}", json_path);

    ExitCode::SUCCESS
}
