// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, ArgGroup, Command, value_parser};

fn json_args(cmd: Command) -> Command {
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
            .conflicts_with("json")
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("spendlog")
        .version(clap::crate_version!())
        .about("Record expenses, group them by category and report on them")
        .arg(
            Arg::new("file")
                .long("file")
                .global(true)
                .env("SPENDLOG_FILE")
                .value_name("PATH")
                .help("Ledger file (default: platform data dir)"),
        )
        .arg(
            Arg::new("currency")
                .long("currency")
                .global(true)
                .env("SPENDLOG_CURRENCY")
                .value_name("SYMBOL")
                .help("Currency symbol used when printing amounts"),
        )
        .subcommand(
            Command::new("add")
                .about("Record an expense")
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(Arg::new("category").long("category").required(true))
                .arg(Arg::new("description").long("description"))
                .arg(
                    Arg::new("date")
                        .long("date")
                        .help("YYYY-MM-DD, defaults to today"),
                ),
        )
        .subcommand(json_args(
            Command::new("list")
                .about("List expenses, most recent first")
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize)),
                ),
        ))
        .subcommand(
            Command::new("delete")
                .about("Delete an expense by id, or the first one matching date/category/amount")
                .arg(
                    Arg::new("id")
                        .long("id")
                        .value_parser(value_parser!(u64))
                        .conflicts_with_all(["date", "category", "amount"]),
                )
                .arg(Arg::new("date").long("date").requires_all(["category", "amount"]))
                .arg(Arg::new("category").long("category").requires_all(["date", "amount"]))
                .arg(Arg::new("amount").long("amount").requires_all(["date", "category"]))
                .group(
                    ArgGroup::new("target")
                        .args(["id", "date"])
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("reset").about("Delete ALL expenses").arg(
                Arg::new("yes")
                    .long("yes")
                    .action(ArgAction::SetTrue)
                    .help("Confirm clearing the ledger"),
            ),
        )
        .subcommand(json_args(
            Command::new("summary")
                .about("Total, count, average and today's spend")
                .arg(
                    Arg::new("today")
                        .long("today")
                        .help("Day counted as today (YYYY-MM-DD)"),
                ),
        ))
        .subcommand(Command::new("report").about("Category breakdown report"))
        .subcommand(
            Command::new("export")
                .about("Write all expenses to a file")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("csv|json"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        )
        .subcommand(Command::new("categories").about("List the expense categories"))
}
