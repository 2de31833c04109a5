//! # Application Controller
//!
//! The controller orchestrates the storefront components and manages the
//! event loop. It's responsible for connecting user input to commands,
//! handing fetch plans to the catalog service, and coordinating view
//! updates.

use crate::cmd_args::CommandLineArgs;
use crate::config;
use crate::shop::commands::{CommandContext, CommandEvent, CommandRegistry, ViewModelSnapshot};
use crate::shop::events::{AppMode, EventBus, SimpleEventBus, ViewEvent};
use crate::shop::io::{EventStream, RenderStream};
use crate::shop::services::{CatalogMessage, CatalogService};
use crate::shop::view_models::ViewModel;
use crate::shop::views::{TerminalRenderer, ViewRenderer};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent};
use std::time::Duration;

/// The main application controller that orchestrates the MVVM pattern
pub struct AppController<ES: EventStream, RS: RenderStream> {
    view_model: ViewModel,
    view_renderer: TerminalRenderer<RS>,
    command_registry: CommandRegistry,
    catalog_service: CatalogService,
    event_stream: ES,
    should_quit: bool,
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Create new application controller with injected I/O streams
    /// (dependency injection)
    pub fn with_io_streams(
        cmd_args: CommandLineArgs,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        let mut view_model = ViewModel::new();

        // Pass RenderStream ownership to the View layer (TerminalRenderer)
        let view_renderer = TerminalRenderer::with_render_stream(render_stream)?;
        let command_registry = CommandRegistry::new();

        // Synchronize view model with actual terminal size
        let (width, height) = view_renderer.terminal_size();
        view_model.update_terminal_size(width, height);

        // The command line flag wins over the environment and the default
        let base_url = cmd_args
            .api_url()
            .cloned()
            .unwrap_or_else(config::get_api_base_url);
        tracing::debug!("Using catalog API at '{base_url}'");
        let catalog_service = CatalogService::new(base_url)?;

        Self::configure_view_model(&mut view_model, &cmd_args);

        Ok(Self {
            view_model,
            view_renderer,
            command_registry,
            catalog_service,
            event_stream,
            should_quit: false,
        })
    }

    /// Configure view model with command line arguments and observers
    fn configure_view_model(view_model: &mut ViewModel, cmd_args: &CommandLineArgs) {
        view_model.set_verbose(cmd_args.verbose());

        // Model events flow to the log through the bus
        let mut event_bus = SimpleEventBus::new();
        event_bus.subscribe_to_model_events(Box::new(|event| {
            tracing::info!("model event: {event:?}");
        }));
        view_model.set_event_bus(Box::new(event_bus));
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        // Initialize view renderer (handles all terminal setup)
        self.view_renderer.initialize()?;

        // Initial load mirrors opening the storefront: the category list
        // plus the unfiltered item list
        self.catalog_service.fetch_categories_async();
        let plan = self.view_model.begin_initial_items_fetch();
        self.catalog_service
            .fetch_items_async(plan.category_id.as_deref(), plan.generation);

        // Initial render
        self.view_renderer.render_full(&self.view_model)?;

        // Main event loop
        while !self.should_quit {
            // Apply any completed fetches before waiting on input
            while let Some(message) = self.catalog_service.poll_message() {
                self.handle_catalog_message(message);
            }

            // Handle terminal events with timeout
            if self.event_stream.poll(Duration::from_millis(100))? {
                match self.event_stream.read()? {
                    Event::Key(key_event) => {
                        tracing::debug!("Received key event: {:?}", key_event);
                        self.handle_key_event(key_event)?;
                    }
                    Event::Resize(width, height) => {
                        self.view_model.update_terminal_size(width, height);
                        self.view_renderer.update_size(width, height);
                        // Render on terminal resize
                        self.view_renderer.render_full(&self.view_model)?;
                        self.view_model.collect_pending_view_events();
                        continue;
                    }
                    _ => {
                        // Ignore other events for now
                    }
                }
            }

            // Process view events for selective rendering (if not quitting)
            if !self.should_quit {
                let view_events = self.view_model.collect_pending_view_events();
                self.process_view_events(view_events)?;
            }
        }

        // Cleanup (all handled by view renderer)
        self.view_renderer.cleanup()?;

        Ok(())
    }

    /// Map a key event through the registry and apply the results
    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        // Create command context from current state
        let context = CommandContext::new(ViewModelSnapshot::from_view_model(&self.view_model));

        // Process through command registry
        let events = self.command_registry.process_event(key_event, &context)?;
        for event in events {
            self.apply_command_event(event)?;
        }

        Ok(())
    }

    /// Apply a command event to the view model
    fn apply_command_event(&mut self, event: CommandEvent) -> Result<()> {
        match event {
            CommandEvent::SelectionMoveRequested { direction } => {
                self.view_model.move_selection(direction);
            }
            CommandEvent::PaneSwitchRequested => {
                self.view_model.switch_pane();
            }
            CommandEvent::CategoryActivateRequested => {
                let plan = self.view_model.activate_selected_category();
                self.catalog_service
                    .fetch_items_async(plan.category_id.as_deref(), plan.generation);
            }
            CommandEvent::DetailOpenRequested => {
                self.view_model.open_selected_detail();
            }
            CommandEvent::DetailCloseRequested => {
                self.view_model.close_detail();
            }
            CommandEvent::CartAddRequested => {
                if self.view_model.mode() == AppMode::Detail {
                    self.view_model.add_detail_item_to_cart();
                } else {
                    self.view_model.add_selected_to_cart();
                }
            }
            CommandEvent::CartIncrementRequested => {
                self.view_model.increment_selected_cart_line();
            }
            CommandEvent::CartDecrementRequested => {
                self.view_model.decrement_selected_cart_line();
            }
            CommandEvent::CartRemoveRequested => {
                self.view_model.remove_selected_cart_line();
            }
            CommandEvent::RefreshRequested => {
                let plan = self.view_model.refresh_plan();
                self.catalog_service
                    .fetch_items_async(plan.category_id.as_deref(), plan.generation);
            }
            CommandEvent::QuitRequested => {
                self.should_quit = true;
            }
        }

        Ok(())
    }

    /// Apply a completed fetch to the view model
    fn handle_catalog_message(&mut self, message: CatalogMessage) {
        match message {
            CatalogMessage::CategoriesLoaded(categories) => {
                self.view_model.apply_categories(categories);
            }
            CatalogMessage::CategoriesFailed { message } => {
                self.view_model.categories_fetch_failed(message);
            }
            CatalogMessage::ItemsLoaded { generation, items } => {
                self.view_model.apply_items(generation, items);
            }
            CatalogMessage::ItemsFailed {
                generation,
                message,
            } => {
                self.view_model.items_fetch_failed(generation, message);
            }
        }
    }

    /// Process view events for selective rendering instead of always doing
    /// full redraws
    fn process_view_events(&mut self, view_events: Vec<ViewEvent>) -> Result<()> {
        if view_events.is_empty() {
            return Ok(());
        }

        // Group events to avoid redundant renders
        let mut needs_full_redraw = false;
        let mut needs_catalog = false;
        let mut needs_cart = false;
        let mut needs_detail = false;
        let mut needs_status_bar = false;

        for event in view_events {
            match event {
                ViewEvent::FullRedrawRequired => {
                    needs_full_redraw = true;
                    // Full redraw overrides all other events
                    break;
                }
                ViewEvent::CatalogRedrawRequired => needs_catalog = true,
                ViewEvent::CartRedrawRequired => needs_cart = true,
                ViewEvent::DetailRedrawRequired => needs_detail = true,
                ViewEvent::StatusBarUpdateRequired => needs_status_bar = true,
            }
        }

        if needs_full_redraw {
            self.view_renderer.render_full(&self.view_model)?;
            return Ok(());
        }

        if needs_catalog {
            self.view_renderer.render_catalog(&self.view_model)?;
        }
        if needs_cart {
            self.view_renderer.render_cart(&self.view_model)?;
        }
        // The overlay paints above the content areas
        if needs_detail {
            self.view_renderer.render_detail(&self.view_model)?;
        }
        if needs_status_bar {
            self.view_renderer.render_status_bar(&self.view_model)?;
        }

        Ok(())
    }

    /// Get reference to view model (for testing)
    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    /// Get mutable reference to view model (for testing)
    pub fn view_model_mut(&mut self) -> &mut ViewModel {
        &mut self.view_model
    }

    /// Process a single key event without running the full event loop
    /// (for testing)
    pub fn process_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        self.handle_key_event(key_event)?;

        if !self.should_quit {
            let view_events = self.view_model.collect_pending_view_events();
            self.process_view_events(view_events)?;
        }

        Ok(())
    }

    /// Check if the application should quit (for testing)
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
