//! Behaviour-driven step definitions driving the recommend CLI scenarios.

use super::helpers::{Workspace, write_utf8};
use super::*;
use crate::recommend::run_recommend_with;
use clap::Parser;
use palate_core::{LikedDishes, Recommendation};
use palate_scorer::KdeRecommender;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

const LIKED: [&str; 4] = ["c0-d0", "c0-d2", "c0-d4", "c0-d6"];

struct RecommendWorld {
    workspace: Workspace,
    include_liked_path: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RecommendWorld {
    fn new() -> Self {
        Self {
            workspace: Workspace::new(),
            include_liked_path: RefCell::new(true),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["palate".to_owned(), "recommend".to_owned()];
        if *self.include_liked_path.borrow() {
            argv.push(self.workspace.liked().into_string());
        }
        argv.extend([
            format!("--{ARG_CATALOG}"),
            self.workspace.catalog().into_string(),
        ]);
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn printed(&self) -> Recommendation {
        let stdout = String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8");
        serde_json::from_str(&stdout).expect("output should be a JSON recommendation")
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> RecommendWorld {
    RecommendWorld::new()
}

#[given("a catalog of two ten-dish clusters exists on disk")]
fn catalog_exists(#[from(world)] world: &RecommendWorld) {
    assert!(world.workspace.catalog().is_file());
}

#[given("a liked list with four dishes from the first cluster")]
fn liked_list_exists(#[from(world)] world: &RecommendWorld) {
    world.workspace.write_liked(&LIKED);
}

#[given("the liked list contains invalid JSON")]
fn liked_list_invalid(#[from(world)] world: &RecommendWorld) {
    write_utf8(&world.workspace.liked(), b"[\"c0-d0\",");
}

#[given("I omit the liked list path")]
fn omit_liked_path(#[from(world)] world: &RecommendWorld) {
    *world.include_liked_path.borrow_mut() = false;
}

#[given("I pass the include-liked flag")]
fn pass_include_liked(#[from(world)] world: &RecommendWorld) {
    world
        .cli_args
        .borrow_mut()
        .push(format!("--{ARG_INCLUDE_LIKED}"));
}

#[given("I require at least fifteen liked dishes")]
fn require_fifteen(#[from(world)] world: &RecommendWorld) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_MIN_LIKED}"), "15".to_owned()]);
}

#[when("I run the recommend command")]
fn run_recommend_command(#[from(world)] world: &RecommendWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Recommend(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_recommend_with(args, &KdeRecommender::new(), &mut *buffer)
        }
        Command::Sample(_) => panic!("expected recommend command"),
    });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds and prints six recommendations")]
fn prints_six(#[from(world)] world: &RecommendWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");
    assert_eq!(world.printed().len(), 6);
}

#[then("the command succeeds and prints ten recommendations")]
fn prints_ten(#[from(world)] world: &RecommendWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");
    let printed = world.printed();
    assert_eq!(printed.len(), 10);
    assert!(LIKED.iter().all(|id| printed.iter().any(|dish| dish.id.as_str() == *id)));
}

#[then("no printed dish is in the liked list")]
fn no_liked_dish_printed(#[from(world)] world: &RecommendWorld) {
    let liked = LikedDishes::from_iter(LIKED);
    assert!(
        world
            .printed()
            .iter()
            .all(|dish| !liked.contains(dish.id.as_str()))
    );
}

#[then("the command fails because the liked list path is missing")]
fn fails_missing_liked_path(#[from(world)] world: &RecommendWorld) {
    match &*world.error() {
        CliError::MissingPositional { name, env } => {
            assert_eq!(*name, ARG_LIKED);
            assert_eq!(*env, ENV_RECOMMEND_LIKED);
        }
        other => panic!("expected MissingPositional, found {other:?}"),
    }
}

#[then("the command fails because too few liked dishes were found")]
fn fails_too_few_liked(#[from(world)] world: &RecommendWorld) {
    match &*world.error() {
        CliError::TooFewLikedDishes { resolved, required } => {
            assert_eq!(*resolved, 4);
            assert_eq!(*required, 15);
        }
        other => panic!("expected TooFewLikedDishes, found {other:?}"),
    }
}

#[then("the command fails because the liked list JSON is invalid")]
fn fails_invalid_json(#[from(world)] world: &RecommendWorld) {
    match &*world.error() {
        CliError::ParseInput { field, .. } => assert_eq!(*field, ARG_LIKED),
        other => panic!("expected ParseInput, found {other:?}"),
    }
}

macro_rules! register_recommend_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/recommend_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RecommendWorld) {
            let _ = world;
        }
    };
}

register_recommend_scenario!(recommend_happy_path, "recommending from a liked list");
register_recommend_scenario!(recommend_include_liked, "keeping liked dishes in the output");
register_recommend_scenario!(recommend_missing_liked, "rejecting a missing liked list path");
register_recommend_scenario!(recommend_below_minimum, "rejecting a liked list below the minimum");
register_recommend_scenario!(recommend_invalid_json, "rejecting invalid JSON input");
