use clap::Parser;
use watson_rss::{cli, config, credentials, error, handlers, host, logging, settings, template};
use watson_rss::{dispatch, initialize_bindings, on_open};
use cli::{Cli, Commands};
use config::Config;
use credentials::FileCredentialLoader;
use error::Result;
use handlers::CommandHandlers;
use host::WorkbookHost;
use logging::LogConfig;
use watson_rss_common::{load_configuration, load_field_index, watson_menu, MenuAction};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&LogConfig::from_verbosity(cli.verbose, cli.log_format))?;
    let config = Config::load()?;
    let verbose = cli.verbose > 0;

    match cli.command {
        Commands::Menu { json } => {
            let menu = watson_menu();
            if json {
                println!("{}", serde_json::to_string_pretty(&menu)?);
            } else {
                print!("{}", menu);
            }
        }

        Commands::Layout { json } => {
            let index = load_field_index();
            let layout = load_configuration();

            if json {
                let value = serde_json::json!({
                    "fieldIndex": index,
                    "configuration": layout,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("フィールドインデックス:");
                for (name, offset) in index.entries() {
                    println!("  {:<14} {:>2}  {}", name, offset, watson_rss_common::field_label(name));
                }
                println!("設定:");
                println!("  設定シート名: {}", layout.ws_name);
                println!("  設定シート定義開始: {}行 {}列", layout.st_start_row, layout.st_start_col);
                println!("  RSS開始: {}行 {}列", layout.rss_start_row, layout.rss_start_col);
                println!("  通知設定定義開始: {}行 {}列", layout.notif_start_row, layout.notif_start_col);
                println!("  分類器表示開始: {}行 {}列", layout.clfs_start_row, layout.clfs_start_col);
                println!("  ログ開始: {}行 {}列", layout.log_start_row, layout.log_start_col);
                println!("  分類結果上書き: {}", if layout.result_override { "有効" } else { "無効" });
            }
        }

        Commands::Open { workbook } => {
            println!("📂 watson-rss - オープン時処理\n");

            let mut host = WorkbookHost::new(&workbook);
            let loader = FileCredentialLoader::new(config.credentials_path.clone());

            println!("[1/2] 初期化中...");
            let bindings = initialize_bindings(&host, &loader)?;
            let config_set = bindings.config_set();
            println!("✔ ワークブック: {}", host.path().display());
            println!("✔ スプレッドシートID: {}", config_set.ss_id);
            println!("✔ 設定シート: {}\n", config_set.layout.ws_name);

            println!("[2/2] メニュー登録・分類器チェック中...");
            let mut handlers = CommandHandlers::new(config.handlers.clone(), verbose);
            on_open(&mut host, &bindings, &mut handlers)?;
            for menu in host.menus() {
                print!("{}", menu);
            }

            println!("\n✅ 完了");
        }

        Commands::Run { action, workbook } => {
            let action: MenuAction = action.parse()?;
            println!("🚀 watson-rss - {}\n", action.label());

            let host = WorkbookHost::new(&workbook);
            let loader = FileCredentialLoader::new(config.credentials_path.clone());
            let bindings = initialize_bindings(&host, &loader)?;

            let mut handlers = CommandHandlers::new(config.handlers.clone(), verbose);
            dispatch(action, &bindings, &mut handlers)?;

            println!("✅ {} 完了", action.label());
        }

        Commands::Settings { workbook, json } => {
            let layout = load_configuration();
            let rows = settings::read_settings(&workbook, &layout, &load_field_index())?;

            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else if rows.is_empty() {
                println!("設定シート「{}」に定義がありません", layout.ws_name);
            } else {
                for row in &rows {
                    let slots = row
                        .slots
                        .iter()
                        .map(|s| s.slot.label())
                        .collect::<Vec<_>>()
                        .join(", ");
                    println!(
                        "{}行目: {} (開始 {}行 {}列, 学習テキスト列 {}) [{}]",
                        row.row, row.ws_name, row.start_row, row.start_col, row.train_column, slots
                    );
                }
            }
        }

        Commands::Template { output } => {
            template::write_template(&output, &load_configuration(), &load_field_index())?;
            println!("✔ テンプレートを保存: {}", output.display());
        }

        Commands::Config { set_credentials, set_handler, show } => {
            let mut config = config;
            let changed = set_credentials.is_some() || !set_handler.is_empty();

            if let Some(path) = set_credentials {
                config.set_credentials_path(path);
                println!("✔ クレデンシャルファイルを設定しました");
            }

            for assignment in &set_handler {
                let (name, command) = config::parse_handler_assignment(assignment)?;
                if name != watson_rss_common::CHECK_CLASSIFIERS_HANDLER {
                    name.parse::<MenuAction>()?;
                }
                println!("✔ ハンドラを設定しました: {}", name);
                config.set_handler(name, command);
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!(
                    "  クレデンシャル: {}",
                    config
                        .credentials_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".into())
                );
                println!("  ハンドラ:");
                let names = MenuAction::ALL
                    .iter()
                    .map(|a| a.handler_name())
                    .chain(std::iter::once(watson_rss_common::CHECK_CLASSIFIERS_HANDLER));
                for name in names {
                    match config.handlers.get(name) {
                        Some(cmd) => println!("    {}: {} {}", name, cmd.program, cmd.args.join(" ")),
                        None => println!("    {}: 未設定", name),
                    }
                }
            }
        }
    }

    Ok(())
}
