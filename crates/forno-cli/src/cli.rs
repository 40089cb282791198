//! Interactive order sessions over stdin.
//!
//! The CLI drives the core wizard: manual or voice entry, the
//! step-by-step builder with running totals, a review screen for
//! fully-understood voice orders, and the checkout success screen.

use std::io::{self, Write as _};
use std::path::Path;

use anyhow::{Context, Result};
use forno_core::services::{
    ChatClient, ChefCommentClient, VoiceInterpreter, VoiceOrderClient, WebhookNotifier,
};
use forno_core::{
    format_price, Advance, Category, CategoryListing, Checkout, Menu, MergeOutcome, OrderResult,
    RecordingSession, Retreat, StepProgress, Wizard, STEPS,
};
use log::{info, warn};

use crate::renderer::TerminalRenderer;

/// How an interactive step session ended.
enum SessionEnd {
    /// The last step was passed; the order goes to checkout
    Checkout,

    /// The user backed out to the landing state
    Exited,
}

/// Interactive CLI session over the order wizard.
pub struct Cli {
    wizard: Wizard<'static>,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer) -> Self {
        Self {
            wizard: Wizard::new(Menu::standard()),
            renderer,
        }
    }

    /// Print the menu, either one category or the whole catalog.
    pub fn show_menu(&self, category: Option<Category>) -> Result<()> {
        let menu = Menu::standard();
        let categories: Vec<Category> = match category {
            Some(category) => vec![category],
            None => STEPS.iter().map(|step| step.category).collect(),
        };

        let mut output = String::from("# منوی پیتزاساز\n\n");
        for category in categories {
            let listing = CategoryListing {
                category,
                items: menu.items(category).iter().collect(),
            };
            output.push_str(&listing.to_string());
            output.push('\n');
        }

        self.renderer.render(&output)
    }

    /// Run a manual step-by-step build session.
    pub async fn run_build(&mut self) -> Result<()> {
        self.wizard.start_manual();
        match self.run_steps()? {
            SessionEnd::Checkout => self.do_checkout().await,
            SessionEnd::Exited => Ok(()),
        }
    }

    /// Run a voice order: read the recording, interpret it, then either
    /// review the complete order or resume the wizard at the first
    /// missing step.
    pub async fn run_voice(&mut self, audio_file: &Path) -> Result<()> {
        let audio = std::fs::read(audio_file)
            .with_context(|| format!("Failed to read audio file '{}'", audio_file.display()))?;

        let mut session = RecordingSession::new();
        session.start()?;
        session.push_chunk(&audio)?;
        let payload = session.stop()?;

        let chat = ChatClient::new().context("Failed to create chat client")?;
        let interpreter = VoiceOrderClient::new(chat, Menu::standard());

        self.renderer.render("هوش مصنوعی در حال تحلیل...\n")?;
        let partial = match interpreter.interpret(&payload).await {
            Ok(partial) => partial,
            Err(e) => {
                warn!("Voice interpretation failed: {e}");
                self.renderer
                    .render("متاسفانه متوجه سفارش شما نشدم. لطفا دوباره تلاش کنید.\n")?;
                return Ok(());
            }
        };

        self.wizard.start_manual();
        match self.wizard.apply_interpretation(&partial) {
            MergeOutcome::Resume { message, .. } => {
                self.renderer.render(&format!("{message}\n\n"))?;
                match self.run_steps()? {
                    SessionEnd::Checkout => self.do_checkout().await,
                    SessionEnd::Exited => Ok(()),
                }
            }
            MergeOutcome::Review => self.review_and_confirm().await,
        }
    }

    /// Step loop: render the current step, then apply one command per
    /// input line until the session ends.
    fn run_steps(&mut self) -> Result<SessionEnd> {
        loop {
            self.render_step()?;

            let Some(input) = read_line("> ")? else {
                // EOF behaves like backing out of the wizard.
                return Ok(SessionEnd::Exited);
            };

            match input.as_str() {
                "" => {}
                "next" | "n" => match self.wizard.advance() {
                    Advance::Checkout => return Ok(SessionEnd::Checkout),
                    Advance::Moved { .. } => {}
                    Advance::Blocked { field } => {
                        self.renderer
                            .render(&format!("لطفا {} را انتخاب کنید.\n", field.label()))?;
                    }
                },
                "back" | "b" => match self.wizard.retreat() {
                    Retreat::Exited => return Ok(SessionEnd::Exited),
                    Retreat::Moved { .. } => {}
                },
                id => {
                    let category = self.wizard.current_step().category;
                    if let Err(e) = self.wizard.toggle_selection(category, id) {
                        self.renderer.render(&format!("{e}\n"))?;
                    }
                }
            }
        }
    }

    /// Review screen for a fully-understood voice order.
    async fn review_and_confirm(&mut self) -> Result<()> {
        loop {
            self.render_preview()?;

            let Some(input) = read_line("تایید (y) / ویرایش (e) / انصراف (q): ")? else {
                return Ok(());
            };

            match input.as_str() {
                "y" => return self.do_checkout().await,
                "e" => {
                    self.wizard.edit_from_review();
                    return match self.run_steps()? {
                        SessionEnd::Checkout => self.do_checkout().await,
                        SessionEnd::Exited => Ok(()),
                    };
                }
                "q" => return Ok(()),
                _ => {}
            }
        }
    }

    /// Finalize the order against the production collaborators and show
    /// the success screen.
    async fn do_checkout(&mut self) -> Result<()> {
        let chat = ChatClient::new().context("Failed to create chat client")?;
        let comment_generator = ChefCommentClient::new(chat);
        let notifier = WebhookNotifier::new().context("Failed to create webhook notifier")?;

        self.renderer.render("در حال ثبت سفارش...\n")?;
        let result = Checkout::new(&comment_generator, &notifier)
            .finalize(self.wizard.config(), self.wizard.menu())
            .await;

        info!("Checkout completed with order id {}", result.order_id);
        self.render_success(&result)
    }

    fn render_step(&self) -> Result<()> {
        let step = self.wizard.current_step();
        let mut output = String::new();

        output.push_str(&StepProgress {
            state: self.wizard.state(),
        }
        .to_string());
        output.push('\n');

        output.push_str(&CategoryListing {
            category: step.category,
            items: self.wizard.available_items(step.category),
        }
        .to_string());
        output.push('\n');

        if step.required {
            output.push_str("یکی از گزینه‌های بالا را انتخاب کنید\n");
        } else {
            output.push_str("انتخاب این مرحله اختیاری است\n");
        }

        let totals = self.wizard.totals();
        output.push_str(&format!(
            "مبلغ قابل پرداخت: {} — {} kcal\n",
            format_price(totals.price),
            totals.calories
        ));
        output.push_str("(شناسه برای انتخاب، next برای ادامه، back برای بازگشت)\n");

        self.renderer.render(&output)
    }

    fn render_preview(&self) -> Result<()> {
        let menu = self.wizard.menu();
        let config = self.wizard.config();
        let totals = self.wizard.totals();

        let mut output = String::from("# فاکتور نهایی\n\n");
        output.push_str(&format!(
            "- سایز نان: {}\n",
            menu.name_of(Category::Size, &config.size)
        ));
        output.push_str(&format!(
            "- نوع خمیر: {}\n",
            menu.name_of(Category::Crust, &config.crust)
        ));
        output.push_str(&format!(
            "- برش: {}\n",
            menu.name_of(Category::Cut, &config.cut)
        ));
        output.push_str(&format!("- پخت: {}\n", config.bake.label()));
        if let Some(sauce) = &config.sauce {
            output.push_str(&format!("- سس: {}\n", menu.name_of(Category::Sauce, sauce)));
        }

        let toppings: Vec<String> = [Category::Cheese, Category::Meats, Category::Veggies]
            .into_iter()
            .filter_map(|category| config.toppings(category).map(|sel| (category, sel)))
            .flat_map(|(category, selection)| {
                selection
                    .keys()
                    .map(move |id| menu.name_of(category, id))
                    .collect::<Vec<_>>()
            })
            .collect();
        output.push('\n');
        if toppings.is_empty() {
            output.push_str("بدون مخلفات اضافه\n");
        } else {
            output.push_str(&format!("مخلفات: {}\n", toppings.join("، ")));
        }

        output.push('\n');
        output.push_str(&format!("کالری تقریبی: {} kcal\n", totals.calories));
        output.push_str(&format!(
            "**مبلغ قابل پرداخت: {}**\n",
            format_price(totals.price)
        ));

        self.renderer.render(&output)
    }

    fn render_success(&self, result: &OrderResult) -> Result<()> {
        let output = format!(
            "# سفارش موفق!\n\n\
             شماره سفارش شما: `#{}`\n\n\
             👨‍🍳 پیام سرآشپز هوشمند:\n\"{}\"\n\n\
             **مبلغ پرداخت شده: {}** — {} kcal\n",
            result.order_id,
            result.chef_comment,
            format_price(result.total_price),
            result.total_calories
        );
        self.renderer.render(&output)
    }
}

/// Prompt and read one trimmed line from stdin; `None` on EOF.
fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin()
        .read_line(&mut line)
        .context("Failed to read input")?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
