use crate::context::Context;
use crate::{CommandAppend, State};
use clap::{App, Arg, ArgMatches, SubCommand};
use dashboard::codec::KeyValue;
use dashboard::editor::{Group, MetadataEditor, PointerButton};
use utility::Error;

pub(crate) struct Metadata;

impl CommandAppend for Metadata {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        let app = app.subcommand(
            SubCommand::with_name("metadata")
                .about(
                    r#"Shows or edits the labels and annotations of a deployed function
	Example:  faas-ui metadata figlet
  faas-ui metadata figlet --label team=blue --remove-annotation topic"#,
                )
                .arg_from_usage("<NAME> 'Name of the deployed function'")
                .arg(
                    Arg::with_name("label")
                        .long("label")
                        .short("l")
                        .takes_value(true)
                        .multiple(true)
                        .number_of_values(1)
                        .help("Set a label, key=value"),
                )
                .arg(
                    Arg::with_name("annotation")
                        .long("annotation")
                        .short("a")
                        .takes_value(true)
                        .multiple(true)
                        .number_of_values(1)
                        .help("Set an annotation, key=value"),
                )
                .arg(
                    Arg::with_name("remove-label")
                        .long("remove-label")
                        .takes_value(true)
                        .multiple(true)
                        .number_of_values(1)
                        .help("Remove the label with this key"),
                )
                .arg(
                    Arg::with_name("remove-annotation")
                        .long("remove-annotation")
                        .takes_value(true)
                        .multiple(true)
                        .number_of_values(1)
                        .help("Remove the annotation with this key"),
                ),
        );
        app
    }
}

impl Metadata {
    #[inline(always)]
    pub(crate) async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
        if let Some(m_args) = args.subcommand_matches("metadata") {
            let context = Context::from_args(args, m_args)?;
            let function_name = m_args.value_of("NAME").unwrap_or_default();

            let dashboard = context.dashboard()?;
            dashboard.refresh_functions().await?;
            dashboard
                .select_function(function_name)
                .ok_or_else(|| State::Error(Error::NotFound(function_name.to_string())))?;
            let mut editor = dashboard
                .metadata_editor()
                .ok_or_else(|| State::Custom("no function selected".to_string()))?;

            let mut changed = false;
            for (group, set, remove) in &[
                (Group::Labels, "label", "remove-label"),
                (Group::Annotations, "annotation", "remove-annotation"),
            ] {
                for entry in m_args.values_of(set).unwrap_or_default() {
                    let (key, value) = parse_key_value(entry)?;
                    upsert(&mut editor, *group, key, value);
                    changed = true;
                }
                for key in m_args.values_of(remove).unwrap_or_default() {
                    if !remove_key(&mut editor, *group, key) {
                        return Err(State::Custom(format!("{} can not be removed", key)));
                    }
                    changed = true;
                }
            }

            if changed {
                dashboard.submit_metadata(&mut editor).await?;
            }
            print_metadata(&editor);
            Err(State::Matched)
        } else {
            Ok(())
        }
    }
}

pub(crate) fn parse_key_value(entry: &str) -> std::result::Result<(&str, &str), State> {
    match entry.find('=') {
        Some(idx) if idx > 0 => Ok((&entry[..idx], &entry[idx + 1..])),
        _ => Err(State::Custom(format!(
            "expected key=value, found {:?}",
            entry
        ))),
    }
}

/// overwrites the row holding `key`, or fills the first blank row, or appends one
fn upsert(editor: &mut MetadataEditor, group: Group, key: &str, value: &str) {
    let (existing, len) = {
        let rows = editor.rows(group).unwrap_or(&[]);
        let existing = rows
            .iter()
            .position(|row| row.key == key)
            .or_else(|| rows.iter().position(KeyValue::is_blank));
        (existing, rows.len())
    };
    let index = match existing {
        Some(index) => index,
        None => {
            editor.add_row(group, len);
            len
        }
    };
    editor.set_entry(group, index, key, value);
    editor.set_visible(group, true);
}

/// false when the key is reserved; unknown keys are ignored
fn remove_key(editor: &mut MetadataEditor, group: Group, key: &str) -> bool {
    let index = editor
        .rows(group)
        .and_then(|rows| rows.iter().position(|row| row.key == key));
    match index {
        Some(index) => editor.remove_row(group, index, PointerButton::Primary),
        None => true,
    }
}

fn print_metadata(editor: &MetadataEditor) {
    for (title, group) in &[
        ("Labels", Group::Labels),
        ("Annotations", Group::Annotations),
        ("Environment", Group::EnvVars),
    ] {
        if !editor.is_visible(*group) {
            continue;
        }
        println!("{}:", title);
        for row in editor.rows(*group).unwrap_or(&[]) {
            if !row.is_blank() {
                println!(" {}: {}", row.key, row.value);
            }
        }
    }
    let secrets = editor.secrets();
    if !secrets.is_empty() {
        println!("Secrets:");
        for secret in secrets {
            println!(" - {}", secret);
        }
    }
}
