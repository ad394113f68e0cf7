use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::types::{Priority, TicketStatus};

#[derive(Parser)]
#[command(name = "atelier")]
#[command(about = "A terminal dashboard for creative-agency operations", version)]
#[command(after_help = "EXAMPLES:
    atelier board                       Kanban board across all brands
    atelier tickets --status production List tickets in production
    atelier ticket view TKT-101         Show ticket details
    atelier brand view acme             Show a brand profile
    atelier member view maya            Show a team member profile")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding brands.json, team.json, tickets.json
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the kanban board, one column per workflow stage
    #[command(after_help = "EXAMPLES:
    atelier board
    atelier board --brand acme
    atelier board --assignee maya")]
    Board(BoardArgs),
    /// Manage tickets
    #[command(after_help = "EXAMPLES:
    atelier ticket list --brand acme
    atelier ticket view TKT-101")]
    Ticket {
        #[command(subcommand)]
        action: TicketCommands,
    },
    /// List tickets (alias for 'ticket list')
    #[command(after_help = "EXAMPLES:
    atelier tickets --overdue
    atelier tickets --brand acme --status production
    atelier tickets --assignee maya --status qa-review --status delivered")]
    Tickets(TicketListArgs),
    /// Manage brands
    #[command(after_help = "EXAMPLES:
    atelier brand view acme")]
    Brand {
        #[command(subcommand)]
        action: BrandCommands,
    },
    /// List brands with ticket statistics
    #[command(after_help = "EXAMPLES:
    atelier brands
    atelier brands --json")]
    Brands,
    /// Manage team members
    #[command(after_help = "EXAMPLES:
    atelier member view maya")]
    Member {
        #[command(subcommand)]
        action: MemberCommands,
    },
    /// List team members with workload
    #[command(after_help = "EXAMPLES:
    atelier team
    atelier team --json")]
    Team,
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    atelier completions bash > ~/.bash_completion.d/atelier
    atelier completions zsh > ~/.zfunc/_atelier
    atelier completions fish > ~/.config/fish/completions/atelier.fish")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    #[command(after_help = "EXAMPLES:
    atelier init")]
    Init,
}

#[derive(Subcommand)]
pub enum TicketCommands {
    /// List tickets
    List(TicketListArgs),
    /// Show ticket details
    View {
        /// Ticket id (e.g., TKT-101)
        id: String,
    },
}

#[derive(Subcommand)]
pub enum BrandCommands {
    /// Show a brand profile with palette, fonts, and ticket stats
    View {
        /// Brand id
        id: String,
    },
}

#[derive(Subcommand)]
pub enum MemberCommands {
    /// Show a team member profile with workload and ticket stats
    View {
        /// Member id
        id: String,
    },
}

#[derive(Args, Clone)]
pub struct BoardArgs {
    /// Only tickets for this brand
    #[arg(long)]
    pub brand: Option<String>,

    /// Only tickets assigned to this member
    #[arg(long)]
    pub assignee: Option<String>,
}

#[derive(Args, Clone)]
pub struct TicketListArgs {
    /// Filter by brand id
    #[arg(long)]
    pub brand: Option<String>,

    /// Filter by assignee id
    #[arg(long)]
    pub assignee: Option<String>,

    /// Filter by workflow stage (repeatable)
    #[arg(long, value_enum)]
    pub status: Vec<TicketStatus>,

    /// Filter by priority
    #[arg(long, value_enum)]
    pub priority: Option<Priority>,

    /// Only overdue tickets
    #[arg(long)]
    pub overdue: bool,

    /// Only tickets due within the next three days
    #[arg(long)]
    pub due_soon: bool,
}
