use std::str::FromStr;
use clap::{ArgMatches, App, AppSettings, Arg};

use crate::config::Config;
use crate::model::form::FormInput;

static VERSION: &str = "0.1.0";
static AUTHOR: &str = "apmaros";
static DESCRIPTION: &str = "Create, list and delete albums on an album server";
const CREATE: &str = "create";
const LIST: &str = "list";
const DELETE: &str = "delete";
const SHELL: &str = "shell";
pub(crate) const ORIGIN: &str = "origin";
const ORIGIN_SHORT: &str = "o";
pub(crate) const LENIENT_STATUS: &str = "lenient-status";
pub(crate) const FIELD: &str = "field";
const FIELD_SHORT: &str = "f";
pub(crate) const ID: &str = "id";
const ID_SHORT: &str = "i";
pub(crate) const OUT: &str = "out";

pub fn build_app<'a, 'b>() -> App<'a, 'b> {
    App::new("albumsync")
        .version(VERSION)
        .author(AUTHOR)
        .about(DESCRIPTION)
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(Arg::with_name(ORIGIN)
            .short(ORIGIN_SHORT)
            .long(ORIGIN)
            .takes_value(true)
            .global(true)
            .help("Album server origin, defaults to $ALBUMSYNC_ORIGIN or http://localhost:8081"))
        .arg(Arg::with_name(LENIENT_STATUS)
            .long(LENIENT_STATUS)
            .takes_value(false)
            .global(true)
            .help("Treat any JSON answer to create/list as success, whatever the status code"))
        .subcommand(App::new(CREATE)
            .about("Submits a new album and shows the refreshed list")
            .arg(Arg::with_name(FIELD)
                .short(FIELD_SHORT)
                .long(FIELD)
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .help("Form field as name=value, e.g. -f title=Jeru")))
        .subcommand(App::new(LIST)
            .about("Shows the album list")
            .arg(Arg::with_name(OUT)
                .long(OUT)
                .takes_value(true)
                .help("Writes the page to a file instead of stdout")))
        .subcommand(App::new(DELETE)
            .about("Deletes the albums with the given ids")
            .arg(Arg::with_name(ID)
                .short(ID_SHORT)
                .long(ID)
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .help("Id of an album row to check before deleting")))
        .subcommand(App::new(SHELL)
            .about("Interactive session over a single page"))
}

pub fn build_cli<'a>() -> ArgMatches<'a> {
    build_app().get_matches()
}

#[derive(Debug, PartialEq)]
pub enum CliCommand {
    Create,
    List,
    Delete,
    Shell,
}

impl FromStr for CliCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CREATE => Ok(Self::Create),
            LIST => Ok(Self::List),
            DELETE => Ok(Self::Delete),
            SHELL => Ok(Self::Shell),
            other => Err(format!("Command {} was not recognised", other)),
        }
    }
}

impl CliCommand {
    pub fn to_str(&self) -> &str {
        match self {
            CliCommand::Create => CREATE,
            CliCommand::List => LIST,
            CliCommand::Delete => DELETE,
            CliCommand::Shell => SHELL,
        }
    }
}

/// Environment config with the command line flags laid over it.
pub fn build_config(matches: &ArgMatches, mut config: Config) -> Config {
    if let Some(origin) = matches.value_of(ORIGIN) {
        config.origin = origin.to_owned();
    }
    if matches.is_present(LENIENT_STATUS) {
        config.lenient_status = true;
    }
    config
}

pub struct CreateCmd {
    pub form: FormInput,
}

impl CreateCmd {
    pub fn build(matches: &ArgMatches) -> Result<Self, String> {
        let pairs = matches.values_of(FIELD).map(|v| v.collect::<Vec<_>>()).unwrap_or_default();
        let form = FormInput::from_pairs(pairs)?;

        Ok(CreateCmd { form })
    }
}

pub struct ListCmd {
    pub out: Option<String>,
}

impl ListCmd {
    pub fn build(matches: &ArgMatches) -> Self {
        ListCmd { out: matches.value_of(OUT).map(String::from) }
    }
}

pub struct DeleteCmd {
    pub ids: Vec<String>,
}

impl DeleteCmd {
    pub fn build(matches: &ArgMatches) -> Self {
        let ids = matches
            .values_of(ID)
            .map(|v| v.map(String::from).collect())
            .unwrap_or_default();

        DeleteCmd { ids }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ArgMatches<'static> {
        build_app().get_matches_from_safe(args.iter()).unwrap()
    }

    #[test]
    fn create_collects_fields_in_order() {
        let matches = parse(&["albumsync", "create", "-f", "title=Jeru", "--field", "artist=Gerry Mulligan"]);
        let (name, sub) = matches.subcommand();

        assert_eq!(CliCommand::from_str(name), Ok(CliCommand::Create));
        let cmd = CreateCmd::build(sub.unwrap()).unwrap();
        assert_eq!(cmd.form.get("title"), Some("Jeru"));
        assert_eq!(cmd.form.get("artist"), Some("Gerry Mulligan"));
    }

    #[test]
    fn create_rejects_malformed_field() {
        let matches = parse(&["albumsync", "create", "-f", "title"]);
        assert!(CreateCmd::build(matches.subcommand_matches(CREATE).unwrap()).is_err());
    }

    #[test]
    fn delete_collects_ids() {
        let matches = parse(&["albumsync", "delete", "--id", "1", "-i", "2"]);
        let cmd = DeleteCmd::build(matches.subcommand_matches(DELETE).unwrap());

        assert_eq!(cmd.ids, vec!["1", "2"]);
    }

    #[test]
    fn global_flags_override_config() {
        let matches = parse(&["albumsync", "list", "--origin", "http://example.test:1", "--lenient-status"]);
        let sub = matches.subcommand_matches(LIST).unwrap();
        let config = build_config(sub, Config::default());

        assert_eq!(config.origin, "http://example.test:1");
        assert!(config.lenient_status);
    }

    #[test]
    fn list_out_is_optional() {
        let matches = parse(&["albumsync", "list"]);
        assert_eq!(ListCmd::build(matches.subcommand_matches(LIST).unwrap()).out, None);
    }

    #[test]
    fn unknown_command_names() {
        assert!(CliCommand::from_str("upload").is_err());
        assert_eq!(CliCommand::Shell.to_str(), "shell");
    }
}
