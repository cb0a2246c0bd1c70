//! Rubrics and content extraction for the judged metrics.
//!
//! Each rubric is a natural-language scoring guide with explicit bands so
//! the judge's numeric output stays consistent across calls. The content
//! builders pull the relevant slice of a parsed record (questions, or
//! rules plus examples) into the text the judge actually reads; they
//! return `None` when there is nothing to evaluate, which the metric
//! layer scores as 0 without a delegation call.

use crate::mapping::ExampleMap;

/// Examples sent to the testability judge are capped to bound prompt size.
pub const TESTABILITY_SAMPLE: usize = 5;

/// Wrap a rubric in the evaluator preamble and the bare-number demand.
pub fn judge_prompt(rubric: &str, content: &str) -> String {
    format!(
        r#"You are an expert evaluator for BDD Example Mapping outputs.

Carefully analyze the content against the rubric criteria.
Be precise and consistent in your evaluation.

{rubric}

IMPORTANT: Return ONLY a number between 0.0 and 1.0.
No explanation, no text, just the numeric score.

CONTENT TO EVALUATE:

{content}"#
    )
}

pub const THREE_AMIGOS: &str = r#"EVALUATION RUBRIC: Three Amigos Coverage (0.0-1.0)

Assess whether questions represent all three BDD perspectives:

**Developer Perspective (0.33 maximum)**
Questions addressing:
- Technical complexity and implementation challenges (複雑、実装、技術的)
- Integration with existing features (既存機能、整合性、依存関係)
- Architecture, performance, and infrastructure (設計、性能、API、データベース)

Score:
- 0.33: 2+ different developer concerns present
- 0.17: 1 developer concern present
- 0.00: No developer concerns

**Tester Perspective (0.33 maximum)**
Questions addressing:
- Edge cases and special scenarios (エッジケース、特殊ケース、例外)
- Boundary values and limits (境界値、最小、最大)
- Error handling and validation (エラー、異常系、バリデーション、検証)
- Test automation feasibility (テスト、自動化)

Score:
- 0.33: 2+ different tester concerns present
- 0.17: 1 tester concern present
- 0.00: No tester concerns

**Product Owner Perspective (0.34 maximum)**
Questions addressing:
- Business value and benefits (ビジネス価値、価値、効果)
- Priorities and MVP scope (優先順位、重要度、MVP、必須)
- User impact and experience (ユーザー、利用者、顧客)
- ROI and cost-benefit (売上、収益、コスト、効率)

Score:
- 0.34: 2+ different PO concerns present
- 0.17: 1 PO concern present
- 0.00: No PO concerns

**TOTAL SCORE**: Sum all three perspective scores (0.0-1.0)"#;

pub const QUESTION_PATTERNS: &str = r#"EVALUATION RUBRIC: Question Pattern Diversity (0.0-1.0)

Assess coverage of three essential question generation patterns:

**Discovery Questions (0.35 maximum)**
Questions that uncover hidden business rules and constraints:
- Identifying business rules (ルール、ビジネスルール、仕様)
- Trigger conditions (どんな場合、いつ、どのような状況)
- Constraints, prerequisites, root causes (制約、禁止、前提条件、なぜ)

Examples:
- "どんな場合にマイナス表示が必要か?"
- "守るべきビジネスルールは何か?"

Score:
- 0.35: 2+ discovery questions present
- 0.18: 1 discovery question present
- 0.00: No discovery questions

**Clarification Questions (0.30 maximum)**
Questions that resolve ambiguity and define precise scope:
- Requesting specificity or examples (具体的に、例えば)
- Defining terms and scope (定義、意味、範囲、対象)
- Optionality (必須、任意、オプション)

Examples:
- "『マイナス値』とは具体的にどの範囲?"
- "赤字表示は必須か任意か?"

Score:
- 0.30: 2+ clarification questions present
- 0.15: 1 clarification question present
- 0.00: No clarification questions

**Boundary Questions (0.35 maximum - highest weight)**
Questions exploring edge cases and limits:
- Min/max values and boundary conditions (最小、最大、上限、下限、境界値)
- Empty/null/zero states (空、null、未設定、ゼロ、0)
- Negative and default values (負、マイナス、デフォルト、初期値)

Examples:
- "ゼロの場合の表示は?"
- "未入力時のデフォルト値は?"

Score:
- 0.35: 2+ boundary questions present
- 0.18: 1 boundary question present
- 0.00: No boundary questions

**TOTAL SCORE**: Sum all three pattern scores (0.0-1.0)

NOTE: Boundary questions have the highest weight because they prevent the most production bugs."#;

pub const EXAMPLE_TESTABILITY: &str = r#"EVALUATION RUBRIC: Example Testability (0.0-1.0)

Assess ALL examples and return the AVERAGE score.

For EACH example, evaluate three dimensions:

**Given/When/Then Structure (0.40 per example)**
BDD examples should follow Gherkin syntax:
- **Given**: Clear preconditions (前提、与えられた、初期状態)
- **When**: Clear action or trigger (もし、場合、操作、実行)
- **Then**: Clear expected outcome (ならば、結果、期待、表示される)

Score per example:
- 0.40: All 3 components clearly present
- 0.20: 2 components present
- 0.00: 0-1 components

**Concrete Values (0.30 per example)**
Examples should specify actual data, not abstract descriptions:
- Specific numbers (金額が-500,000円、件数が10件)
- Quoted strings or identifiable values (ID: 12345、"エラーメッセージ")
- "大きな負の値" or "適切な金額" are abstract, not testable

Score per example:
- 0.30: 2+ concrete values present
- 0.15: 1 concrete value present
- 0.00: No concrete values

**Verifiable Outcomes (0.30 per example)**
Expected results should be observable and testable:
- UI changes, error messages, status changes (表示される、エラーメッセージ、完了)
- Data or state changes (保存される、更新される、状態が遷移)
- "適切に処理される" is not verifiable

Score per example:
- 0.30: 2+ verifiable outcomes present
- 0.15: 1 verifiable outcome present
- 0.00: No verifiable outcomes

**CALCULATION**:
1. Score EACH example individually (0.0-1.0)
2. Calculate AVERAGE across all examples
3. Return final average (0.0-1.0)"#;

/// All questions across the three categories, one per line.
pub fn three_amigos_content(map: &ExampleMap) -> Option<String> {
    let all: Vec<&str> = map
        .questions
        .blocker
        .iter()
        .chain(&map.questions.clarification)
        .chain(&map.questions.future)
        .map(String::as_str)
        .collect();

    let joined = all.join("\n");
    if joined.trim().is_empty() {
        return None;
    }
    Some(format!("Questions:\n{}", joined))
}

/// Blocker and clarification questions only. Future questions carry no
/// discovery or boundary signal, so they are left out of this dimension.
pub fn question_pattern_content(map: &ExampleMap) -> Option<String> {
    let critical: Vec<&str> = map
        .questions
        .blocker
        .iter()
        .chain(&map.questions.clarification)
        .map(String::as_str)
        .collect();

    let joined = critical.join("\n");
    if joined.trim().is_empty() {
        return None;
    }
    Some(format!(
        "Critical Questions (blocker + clarification):\n{}",
        joined
    ))
}

/// Rule-labeled Given/When/Then blocks, capped at [`TESTABILITY_SAMPLE`].
pub fn testability_content(map: &ExampleMap) -> Option<String> {
    let mut blocks = Vec::new();
    for rule in &map.rules {
        for example in &rule.examples {
            blocks.push(format!(
                "Rule: {}\nGiven: {}\nWhen: {}\nThen: {}",
                rule.name, example.given, example.when, example.then
            ));
            if blocks.len() == TESTABILITY_SAMPLE {
                break;
            }
        }
        if blocks.len() == TESTABILITY_SAMPLE {
            break;
        }
    }

    if blocks.is_empty() {
        return None;
    }
    Some(format!("Examples:\n\n{}", blocks.join("\n\n---\n\n")))
}
