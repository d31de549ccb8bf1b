use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use log::{error, info, warn};
use seahorse::{App, Command, Context, Flag, FlagType};

use fatura::config::Config;
use fatura::{generate_invoice, Outcome};

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    if let Err(e) = run() {
        error!("{:?}", e);
        ::std::process::exit(1);
    }
}

mod seahorse_exts {
    use core::fmt;
    use std::path::PathBuf;

    use anyhow::Context as _;
    use log::error;
    use seahorse::{Command, Context};

    type TryAction<E> = fn(_: &Context) -> Result<(), E>;

    pub trait ErrorLike: Send + Sync + fmt::Debug + 'static {}

    impl<E: Send + Sync + fmt::Debug + 'static> ErrorLike for E {}

    pub trait TryActionExt {
        #[must_use]
        fn try_action<E>(self, action: TryAction<E>) -> Self
        where
            E: ErrorLike;
    }

    impl TryActionExt for Command {
        fn try_action<E>(self, action: TryAction<E>) -> Self
        where
            E: ErrorLike,
        {
            self.action(move |context: &Context| {
                if let Err(e) = action(context) {
                    error!("{:?}", e);
                    ::std::process::exit(1);
                }
            })
        }
    }

    pub trait ContextExt {
        fn context(&self) -> &Context;

        fn required_string_flag(&self, name: &str) -> Result<String, anyhow::Error> {
            self.context()
                .string_flag(name)
                .with_context(|| anyhow::anyhow!("missing required flag \"{}\"", name))
        }

        fn required_path_flag(&self, name: &str) -> Result<PathBuf, anyhow::Error> {
            self.required_string_flag(name).map(PathBuf::from)
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::{ContextExt, TryActionExt};

fn build_config(config_path: &Path, output: Option<PathBuf>) -> anyhow::Result<Config> {
    let workspace = dunce::canonicalize(config_path)
        .map_err(|e| anyhow::anyhow!(e))?
        .parent()
        .ok_or_else(|| anyhow::anyhow!("config file should have a parent directory"))?
        .to_path_buf();

    let mut builder = Config::try_from_toml_file(config_path)?;

    builder.output_dir(output.unwrap_or_else(|| workspace.join("faturas/")));

    let config = builder.build();

    info!("finished building config");

    Ok(config)
}

fn make(config: &Config) -> anyhow::Result<()> {
    match generate_invoice(config)? {
        Outcome::Written(path) => info!("fatura gerada: \"{}\"", path.display()),
        Outcome::NoRecords => {
            warn!("nenhum registro encontrado para o período, nenhuma fatura foi gerada")
        }
    }

    Ok(())
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let make_command = Command::new("make")
        .usage(format!("{} make [args]", args[0]))
        .description("Generates the invoice for the configured month.")
        .flag(
            Flag::new("config", FlagType::String)
                .description("Path to the fatura.toml config file."),
        )
        .flag(
            Flag::new("output", FlagType::String).description(
                "[optional] Path to the output folder. Default: `<path to config>/faturas/`",
            ),
        )
        .try_action(|context: &Context| {
            let config_path = context.required_path_flag("config")?;
            let output = context.string_flag("output").ok().map(PathBuf::from);

            let config = build_config(&config_path, output)?;

            make(&config)
        });

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [args]", args[0]))
        .command(make_command);

    app.run(args);

    Ok(())
}
