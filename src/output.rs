//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{CreatePolicyResponse, GroupedPolicies, PolicyResponse};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Flat list of policies
#[derive(Debug, Serialize)]
pub struct PolicyListResult {
    /// Policies, each tagged with its business partner number
    pub policies: Vec<PolicyResponse>,
}

/// Policies grouped by business partner number
#[derive(Debug, Serialize)]
pub struct GroupedPolicyResult {
    /// Policies by source key
    pub policies: GroupedPolicies,
}

/// A single policy
#[derive(Debug, Serialize)]
pub struct PolicyDetailResult {
    /// The policy
    pub policy: PolicyResponse,
}

/// Result of registering a policy
#[derive(Debug, Serialize)]
pub struct CreateResult {
    /// What the store reported
    pub created: CreatePolicyResponse,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn print_policy_line(p: &PolicyResponse) {
    println!(
        "  {}  {}  valid until {}  ({} permission(s))",
        p.policy_id.bold(),
        p.business_partner_number.cyan(),
        p.valid_until.format("%Y-%m-%d %H:%M UTC"),
        p.permissions.len()
    );
}

impl PolicyListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.policies.is_empty() {
            println!("No policies registered.");
            return;
        }

        println!("Policies:\n");
        for p in &self.policies {
            print_policy_line(p);
        }
        println!("\n{} policy(ies) found.", self.policies.len());
    }
}

impl GroupedPolicyResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.policies.is_empty() {
            println!("No policies registered.");
            return;
        }

        for (key, policies) in &self.policies {
            println!("{}:", key.cyan().bold());
            for p in policies {
                println!(
                    "  {}  valid until {}",
                    p.policy_id,
                    p.valid_until.format("%Y-%m-%d %H:%M UTC")
                );
            }
            println!();
        }
    }
}

impl PolicyDetailResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        let p = &self.policy;
        println!("Policy {}", p.policy_id.bold());
        println!("  business partner: {}", p.business_partner_number);
        println!("  created on:       {}", p.created_on.to_rfc3339());
        println!("  valid until:      {}", p.valid_until.to_rfc3339());

        if p.permissions.is_empty() {
            println!("  permissions:      none");
            return;
        }

        println!("  permissions:");
        for perm in &p.permissions {
            println!("    - {}", perm.action.to_string().to_uppercase());
            for c in &perm.constraints.and {
                println!("        and {} {} {}", c.left_operand, c.operator, c.right_operand);
            }
            for c in &perm.constraints.or {
                println!("        or  {} {} {}", c.left_operand, c.operator, c.right_operand);
            }
        }
    }
}

impl CreateResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("{} {}", "Created policy".green(), self.created.policy_id.bold());
                println!("  business partner: {}", self.created.business_partner_number);
                println!("  valid until:      {}", self.created.valid_until.to_rfc3339());
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.success {
                    println!("{}", self.message);
                } else {
                    println!("{}", self.message.red());
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}
