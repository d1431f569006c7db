use crate::{
    callback::{Reply, ReplyCallback},
    cli::{Cli, Commands, DocumentArgs},
    config::DialogDocument,
    constants::STDIN_INDICATOR,
    dialogs::DialogBox,
    error::Result,
    prompt::{get_prompt_provider, AutomaticPrompter, DialogDriver, PromptProvider},
    shell::HeadlessWidget,
    types::{DialogId, DialogKind, Outcome},
};
use log::{debug, info};
use serde_json::Value;
use std::cell::RefCell;
use std::io::Read;
use std::rc::Rc;

type ReplySlot = Rc<RefCell<Option<Reply>>>;

/// Main CLI runner dispatching the subcommands
pub struct Runner {
    command: Commands,
}

impl Runner {
    pub fn new(command: Commands) -> Self {
        Self { command }
    }

    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Render(args) => {
                println!("{}", render_document(&args)?);
            }
            Commands::Run(args) => {
                let reply = if args.non_interactive || args.answers.is_some() {
                    let answers = match &args.answers {
                        Some(answers) => read_answers(answers)?,
                        None => Value::Object(Default::default()),
                    };
                    run_document(&args.document, AutomaticPrompter::from_answers(&answers)?)?
                } else {
                    run_document(&args.document, get_prompt_provider())?
                };
                info!("Dialog closed with {reply:?}");
                println!("{}", serde_json::to_string_pretty(&reply)?);
            }
            Commands::Locales => {
                let dialogs: DialogBox = DialogBox::new();
                for (code, locale) in dialogs.locales().iter() {
                    println!("{code}\t{}\t{}\t{}", locale.ok, locale.cancel, locale.confirm);
                }
            }
        }
        Ok(())
    }
}

/// Entry point of the binary.
pub fn run(cli: Cli) -> Result<()> {
    Runner::new(cli.command).run()
}

/// Markup of the dialog a definition file describes.
pub fn render_document(args: &DocumentArgs) -> Result<String> {
    let (dialogs, id, _) = open_document(args)?;
    dialogs.markup(id)
}

/// Shows the dialog a definition file describes and drives it with `provider`.
pub fn run_document<P: PromptProvider>(args: &DocumentArgs, provider: P) -> Result<Option<Reply>> {
    let (mut dialogs, id, reply) = open_document(args)?;
    DialogDriver::new(provider).drive(&mut dialogs, id)?;
    let reply = reply.borrow_mut().take();
    Ok(reply)
}

fn open_document(args: &DocumentArgs) -> Result<(DialogBox, DialogId, ReplySlot)> {
    let DialogDocument { kind, mut options } = DialogDocument::load(&args.file)?;
    debug!("Opening {kind} dialog from {}", args.file.display());

    let mut dialogs = DialogBox::with_widget(HeadlessWidget::new());
    if let Some(locale) = &args.locale {
        dialogs.set_locale(locale)?;
    }

    let slot = ReplySlot::default();
    if kind != DialogKind::Dialog && options.callback.is_none() {
        options.callback = Some(capture(slot.clone()));
    }
    let id = dialogs.open_kind(kind, options)?;
    Ok((dialogs, id, slot))
}

fn capture(slot: ReplySlot) -> ReplyCallback {
    ReplyCallback::new(move |reply| {
        *slot.borrow_mut() = Some(reply);
        Outcome::Dismiss
    })
}

/// Reads answers given inline or, with `-`, from stdin.
pub fn read_answers(arg: &str) -> Result<Value> {
    let content = if arg == STDIN_INDICATOR {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        arg.to_string()
    };
    Ok(serde_json::from_str(&content)?)
}
