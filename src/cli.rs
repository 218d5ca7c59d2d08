// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn output_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn yes_flag() -> Arg {
    Arg::new("yes")
        .long("yes")
        .short('y')
        .action(ArgAction::SetTrue)
        .help("Confirm without prompting")
}

fn id_arg() -> Arg {
    Arg::new("id")
        .long("id")
        .value_parser(value_parser!(i64))
        .required(true)
}

pub fn build_cli() -> Command {
    Command::new("moneytrack")
        .about("Money Track: local-first personal finance tracking")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Initialize the local data store"))
        .subcommand(output_flags(
            Command::new("dashboard")
                .about("Monthly summary, budget overview, and recent transactions"),
        ))
        .subcommand(
            Command::new("tx")
                .about("Manage transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record an income or expense transaction")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["income", "expense"]),
                        )
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("description").long("description"))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .value_parser(value_parser!(i64))
                                .help("Category id"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD, defaults to today"),
                        ),
                )
                .subcommand(output_flags(
                    Command::new("list")
                        .about("List transactions, filtered and newest first")
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .help("Match description or category name"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["income", "expense"]),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(id_arg())
                        .arg(yes_flag()),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Manage category budgets")
                .subcommand(
                    Command::new("set")
                        .about("Create a budget, or update the amount for an existing pair")
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .value_parser(value_parser!(i64))
                                .help("Category id"),
                        )
                        .arg(Arg::new("amount").long("amount"))
                        .arg(
                            Arg::new("period")
                                .long("period")
                                .default_value("monthly"),
                        ),
                )
                .subcommand(output_flags(
                    Command::new("list").about("Budgets with this month's spend"),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a budget")
                        .arg(id_arg())
                        .arg(yes_flag()),
                ),
        )
        .subcommand(
            Command::new("goal")
                .about("Manage savings goals")
                .subcommand(
                    Command::new("add")
                        .about("Create a savings goal")
                        .arg(Arg::new("title").long("title"))
                        .arg(Arg::new("target").long("target"))
                        .arg(
                            Arg::new("current")
                                .long("current")
                                .help("Starting amount, defaults to 0"),
                        )
                        .arg(Arg::new("date").long("date").help("Target date, YYYY-MM-DD"))
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(
                    Command::new("fund")
                        .about("Add to a goal's saved amount, clamped at its target")
                        .arg(id_arg())
                        .arg(Arg::new("amount").long("amount").required(true)),
                )
                .subcommand(output_flags(
                    Command::new("list").about("Goals with progress and days left"),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a goal")
                        .arg(id_arg())
                        .arg(yes_flag()),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Manage categories")
                .subcommand(
                    Command::new("add")
                        .about("Add a category")
                        .arg(Arg::new("name").long("name"))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["income", "expense"]),
                        ),
                )
                .subcommand(Command::new("list").about("List categories"))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a category and everything referencing it")
                        .arg(id_arg())
                        .arg(yes_flag()),
                ),
        )
        .subcommand(output_flags(
            Command::new("analytics")
                .about("Income/expense trend and expense breakdown by category")
                .arg(
                    Arg::new("months")
                        .long("months")
                        .value_parser(value_parser!(usize))
                        .default_value("6"),
                ),
        ))
        .subcommand(
            Command::new("settings")
                .about("View or change settings")
                .subcommand(Command::new("show").about("Current settings and categories"))
                .subcommand(
                    Command::new("currency")
                        .about("Set the display currency")
                        .arg(
                            Arg::new("code")
                                .value_parser(["INR", "EUR", "GBP", "USD"])
                                .required(true),
                        ),
                )
                .subcommand(
                    Command::new("date-format")
                        .about("Set the date display format")
                        .arg(
                            Arg::new("format")
                                .value_parser(["MM/DD/YYYY", "DD/MM/YYYY", "YYYY-MM-DD"])
                                .required(true),
                        ),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(
                    Command::new("snapshot")
                        .about("Write the full snapshot to a dated JSON file")
                        .arg(
                            Arg::new("out")
                                .long("out")
                                .help("Output directory, defaults to the current one"),
                        ),
                )
                .subcommand(
                    Command::new("transactions")
                        .about("Export the transaction table")
                        .arg(Arg::new("format").long("format").required(true))
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Replace all data from an exported snapshot file")
                .arg(Arg::new("path").long("path").required(true)),
        )
        .subcommand(
            Command::new("clear")
                .about("Wipe all data back to factory defaults")
                .arg(yes_flag()),
        )
}
