// Copyright (c) Contributors to the prodenv project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;

use super::*;

fn request() -> LaunchRequest {
    LaunchRequest {
        software: "maya".to_string(),
        version: "2023.3.2".to_string(),
        packages: vec!["vfxCore-2.5".to_string(), "mtoa-2.3".to_string()],
        env_only: false,
        verbose: false,
    }
}

#[rstest]
fn test_build_full_command() {
    let command = build_launcher_command(&request());
    assert_eq!(
        command,
        vec!["rez", "env", "maya-2023.3.2", "vfxCore-2.5", "mtoa-2.3", "--", "maya"]
    );
}

#[rstest]
fn test_env_only_omits_trailing_command() {
    let command = build_launcher_command(&LaunchRequest {
        env_only: true,
        ..request()
    });
    assert_eq!(
        command,
        vec!["rez", "env", "maya-2023.3.2", "vfxCore-2.5", "mtoa-2.3"]
    );
}

#[rstest]
fn test_verbose_flag_goes_first() {
    let command = build_launcher_command(&LaunchRequest {
        verbose: true,
        ..request()
    });
    assert_eq!(command[..2], ["rez".to_string(), "-v".to_string()]);
}

#[rstest]
fn test_no_packages() {
    let command = build_launcher_command(&LaunchRequest {
        packages: Vec::new(),
        ..request()
    });
    assert_eq!(command, vec!["rez", "env", "maya-2023.3.2", "--", "maya"]);
}
