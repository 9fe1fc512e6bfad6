use anyhow::Result;
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing::{debug, error, info, warn};

use trade_market::{
    config::ConfigLoader,
    handlers::{HostEvent, ScreenEventHandlers},
    logging::{init_logger, print_mc_text},
    market::{parse_price_lines, TradeMarketModel},
    state::MarketState,
    storage::StorageManager,
    text::StyledText,
    types::ItemStack,
    utils::format_number_with_separators,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Chest screens have 54 container slots
const CONTAINER_SIZE: usize = 54;

#[tokio::main]
async fn main() -> Result<()> {
    // Config is read before logging so its level applies
    let config_loader = ConfigLoader::new();
    let config = config_loader.load()?;

    init_logger(&config.log_level)?;
    info!("Starting Trade Market v{}", VERSION);

    let storage = StorageManager::open(config.resolved_storage_path())?;
    info!("Preset filters stored in {:?}", storage.path());
    let state = MarketState::load(storage, config.autosave);
    let handlers = ScreenEventHandlers::new(state.clone());

    info!("Autosave: {}", if config.autosave { "ENABLED" } else { "DISABLED" });
    print_help();

    let mut next_screen_id: u8 = 1;
    let mut lines = BufReader::new(stdin()).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "exit" {
            break;
        }

        if let Err(e) = handle_line(input, &handlers, &mut next_screen_id) {
            error!("Command failed: {:#}", e);
        }
    }

    // Flush anything left over when autosave is off
    if state.flush()? {
        info!("Saved pending changes");
    }
    info!("Trade Market stopped");
    Ok(())
}

fn handle_line(input: &str, handlers: &ScreenEventHandlers, next_screen_id: &mut u8) -> Result<()> {
    let (command, rest) = match input.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (input, ""),
    };
    let state = handlers.state();

    match command {
        "screen" => {
            let id = *next_screen_id;
            *next_screen_id = next_screen_id.wrapping_add(1).max(1);
            handlers.handle(HostEvent::ScreenOpened {
                id,
                title: rest.to_string(),
            });
            let title = StyledText::from_component(rest);
            print_mc_text("Screen", &title);
            info!(
                "Filter screen: {}",
                TradeMarketModel::is_filter_screen(&title)
            );
        }
        "close" => handlers.handle(HostEvent::ScreenClosed),
        "slot" => {
            let Some((slot, lore)) = rest.split_once(' ') else {
                warn!("Usage: slot <index> <lore line> | <lore line> ...");
                return Ok(());
            };
            let slot: usize = slot.parse()?;
            if slot >= CONTAINER_SIZE {
                warn!("Slot {} is outside the container", slot);
                return Ok(());
            }

            let Some(container) = handlers.current_container() else {
                warn!("No screen is open");
                return Ok(());
            };

            let mut slots = container.slots;
            slots.resize(CONTAINER_SIZE, None);
            slots[slot] = Some(ItemStack::new(
                format!("Slot {}", slot),
                slot,
                split_lore(lore),
            ));
            handlers.handle(HostEvent::ContainerContent {
                id: container.id,
                slots,
            });
        }
        "unit" => info!("Unit price: {}", format_price(handlers.unit_price())),
        "lowest" => info!("Lowest price: {}", format_price(handlers.lowest_price())),
        "listing" => {
            let slot: usize = rest.parse()?;
            let price_info = handlers.price_info_at(slot);
            info!("Slot {}: {}", slot, serde_json::to_string(&price_info)?);
        }
        "price" => {
            let lines = split_lore(rest);
            let [price_line, value_line] = lines.as_slice() else {
                warn!("Usage: price <price line> | <value line>");
                return Ok(());
            };

            match parse_price_lines(&price_line.as_str().into(), &value_line.as_str().into()) {
                Ok(price_info) => info!(
                    "Price {} (discounted {}) x{} = {}",
                    format_price(price_info.price),
                    format_price(price_info.discounted_price),
                    price_info.quantity,
                    format_number_with_separators(price_info.total_price())
                ),
                Err(e) => warn!("Could not parse price: {}", e),
            }
        }
        "name" => match TradeMarketModel::simplify_item_name(&rest.into()) {
            Some(name) => print_mc_text("Item", &StyledText::new(name)),
            None => info!("No item name in \"{}\"", rest),
        },
        "find" => match handlers.current_container() {
            Some(container) => match container.find_item_containing(rest) {
                Some(slot) => info!("Found \"{}\" in slot {}", rest, slot),
                None => info!("\"{}\" not found", rest),
            },
            None => warn!("No screen is open"),
        },
        "search" => {
            if !rest.is_empty() {
                state.write().set_last_search_filter(rest);
            }
            info!("Last search filter: \"{}\"", state.read().last_search_filter());
        }
        "preset" => {
            let (id, filter) = match rest.split_once(' ') {
                Some((id, filter)) => (id, Some(filter.trim())),
                None => (rest, None),
            };
            let id: i32 = id.parse()?;

            match filter {
                Some(filter) => state.set_preset_filter(id, filter)?,
                None => match state.read().preset_filter(id) {
                    Some(filter) => info!("Preset {}: \"{}\"", id, filter),
                    None => info!("Preset {} is not set", id),
                },
            }
        }
        "presets" => {
            let model = state.read();
            let mut count = 0;
            for (id, filter) in model.preset_filters() {
                info!("  {:>3}: {}", id, filter);
                count += 1;
            }
            if count == 0 {
                info!("No preset filters saved");
            }
        }
        "save" => {
            if state.flush()? {
                info!("Saved");
            } else {
                debug!("Nothing to save");
            }
        }
        "help" => print_help(),
        _ => warn!("Unknown command: {} (type help)", command),
    }

    Ok(())
}

/// Lore lines are entered separated by `|`
fn split_lore(text: &str) -> Vec<String> {
    text.split('|').map(|l| l.trim().to_string()).collect()
}

fn format_price(price: i32) -> String {
    if price < 0 {
        "unknown".to_string()
    } else {
        format!("{}²", format_number_with_separators(price as i64))
    }
}

fn print_help() {
    info!("Commands:");
    info!("  screen <title>              - open a screen (plain or JSON title)");
    info!("  slot <n> <line> | <line>    - put an item with lore into slot n");
    info!("  close                       - close the current screen");
    info!("  unit | lowest               - sell screen unit price / cheapest offer");
    info!("  listing <n>                 - price info of the listing in slot n");
    info!("  price <line> | <line>       - parse a price and value line");
    info!("  name <heading>              - extract the item name from a heading");
    info!("  find <name>                 - find an item in the current screen");
    info!("  search [filter]             - show or set the last search filter");
    info!("  preset <id> [filter]        - show or save a preset filter");
    info!("  presets                     - list preset filters");
    info!("  save | help | quit");
}
