//! Training and validation datasets for the external optimizers.
//!
//! Two static collections: story inputs with soft validation criteria
//! (used by the genetic multi-objective optimizer, criteria for reporting
//! only), and complete input/output pairs with ground-truth mappings
//! (required by the few-shot context-engineering optimizer). The
//! partitioner splits either collection at `floor(n * ratio)`, shuffled
//! or in fixed order.

use crate::error::Error;
use crate::mapping::{Example, ExampleMap, Questions, Rule, Story};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Soft minimum counts and optional keywords for a story input.
/// Reporting only - never consulted by any scorer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationCriteria {
    pub min_questions: usize,
    pub min_rules: usize,
    #[serde(default)]
    pub expected_keywords: Vec<String>,
}

/// A training case for the multi-objective optimizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GepaExample {
    pub story_input: String,
    pub validation_criteria: ValidationCriteria,
}

/// A training case for the few-shot optimizer: story input plus a
/// complete ground-truth mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AceExample {
    pub story_input: String,
    pub expected: ExampleMap,
}

/// A train/validation partition of either collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset<T> {
    pub train: Vec<T>,
    pub validation: Vec<T>,
}

fn gepa(story: &str, min_questions: usize, min_rules: usize, keywords: &[&str]) -> GepaExample {
    GepaExample {
        story_input: story.to_string(),
        validation_criteria: ValidationCriteria {
            min_questions,
            min_rules,
            expected_keywords: keywords.iter().map(|k| k.to_string()).collect(),
        },
    }
}

/// Story inputs covering diverse request patterns: a concrete display
/// rule, a permissions matrix, a vague usability complaint, a batch
/// automation, and a visualization ask.
pub fn gepa_examples() -> Vec<GepaExample> {
    vec![
        gepa(
            "予実差異レポートで、マイナス値を赤字で表示したい。",
            5,
            1,
            &["マイナス", "赤", "表示"],
        ),
        gepa(
            "経理承認が完了した予算は、部門長も編集できないようにしたい。ただし、CFOと経理部長は編集可能のまま。あと、コメント追加は誰でもできるようにしたい。",
            3,
            3,
            &["承認", "権限", "編集"],
        ),
        gepa(
            "予算入力がやりにくい。もっと早くしたい。Excelみたいに。",
            7,
            3,
            &[],
        ),
        gepa(
            "月次締め処理を自動化したい。",
            5,
            2,
            &["締め", "自動", "処理"],
        ),
        gepa(
            "部門別の予算配分を可視化したい。グラフで見たい。",
            4,
            2,
            &["部門", "グラフ", "可視化"],
        ),
    ]
}

fn example(given: &str, when: &str, then: &str) -> Example {
    Example {
        given: given.to_string(),
        when: when.to_string(),
        then: then.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Ground-truth corpus for the few-shot optimizer. Each entry is a
/// worked Example Mapping session over the same budgeting domain as the
/// story inputs above.
pub fn ace_examples() -> Vec<AceExample> {
    vec![ace_negative_display(), ace_approval_lock(), ace_monthly_close()]
}

fn ace_negative_display() -> AceExample {
    AceExample {
        story_input: "予実差異レポートで、マイナス値を赤字で表示したい。".to_string(),
        expected: ExampleMap {
            story: Story {
                as_a: "予算管理者".to_string(),
                i_want_to: "予実差異のマイナス値を赤字で見たい".to_string(),
                so_that: "問題のある項目をすぐ発見できる".to_string(),
            },
            rules: vec![
                Rule {
                    id: "R1".to_string(),
                    name: "マイナス値は赤字で表示する".to_string(),
                    examples: vec![
                        example(
                            "予実差異が-500,000円の項目がある",
                            "レポートを表示する",
                            "金額が赤字で表示される",
                        ),
                        example(
                            "予実差異が+200,000円の項目がある",
                            "レポートを表示する",
                            "金額が黒字のまま表示される",
                        ),
                    ],
                },
                Rule {
                    id: "R2".to_string(),
                    name: "ゼロは通常表示のままにする".to_string(),
                    examples: vec![example(
                        "予実差異が0円の項目がある",
                        "レポートを表示する",
                        "金額が黒字で表示される",
                    )],
                },
            ],
            questions: Questions {
                blocker: strings(&["対象はどのレポート画面か?"]),
                clarification: strings(&["赤字表示は文字色のみか、背景色も変えるか?"]),
                future: strings(&["色覚多様性向けの配色は必要になるか?"]),
            },
            next_actions: strings(&["デザインチームと配色を確認する"]),
            metadata: None,
        },
    }
}

fn ace_approval_lock() -> AceExample {
    AceExample {
        story_input: "経理承認が完了した予算は、部門長も編集できないようにしたい。".to_string(),
        expected: ExampleMap {
            story: Story {
                as_a: "経理担当者".to_string(),
                i_want_to: "承認済み予算の編集をロックしたい".to_string(),
                so_that: "確定した数字が後から変わらない".to_string(),
            },
            rules: vec![
                Rule {
                    id: "R1".to_string(),
                    name: "承認済み予算は部門長でも編集不可".to_string(),
                    examples: vec![example(
                        "予算B-100が承認済みで、部門長がログインしている",
                        "B-100の金額を変更しようとする",
                        "編集が拒否され「承認済みのため編集できません」と表示される",
                    )],
                },
                Rule {
                    id: "R2".to_string(),
                    name: "CFOと経理部長は承認後も編集可能".to_string(),
                    examples: vec![example(
                        "予算B-100が承認済みで、CFOがログインしている",
                        "B-100の金額を1,000,000円に変更する",
                        "変更が保存され、変更履歴に記録される",
                    )],
                },
                Rule {
                    id: "R3".to_string(),
                    name: "コメント追加は承認後も全員可能".to_string(),
                    examples: vec![example(
                        "予算B-100が承認済みで、一般ユーザーがログインしている",
                        "B-100にコメントを追加する",
                        "コメントが保存される",
                    )],
                },
            ],
            questions: Questions {
                blocker: strings(&["承認を取り消す(差し戻す)操作は誰ができるか?"]),
                clarification: strings(&["「編集」に添付ファイルの追加は含まれるか?"]),
                future: strings(&["承認ワークフローの多段化は想定するか?"]),
            },
            next_actions: strings(&["権限マトリクスを経理部長とレビューする"]),
            metadata: None,
        },
    }
}

fn ace_monthly_close() -> AceExample {
    AceExample {
        story_input: "月次締め処理を自動化したい。".to_string(),
        expected: ExampleMap {
            story: Story {
                as_a: "経理担当者".to_string(),
                i_want_to: "月次締め処理を自動で実行したい".to_string(),
                so_that: "手作業の締め作業に時間を取られない".to_string(),
            },
            rules: vec![
                Rule {
                    id: "R1".to_string(),
                    name: "毎月1日の0時に前月分を自動で締める".to_string(),
                    examples: vec![example(
                        "4月分の予算データが全部門分入力済み",
                        "5月1日の0時になる",
                        "4月分が締め済みステータスになり通知メールが送られる",
                    )],
                },
                Rule {
                    id: "R2".to_string(),
                    name: "未入力の部門があれば締めを保留する".to_string(),
                    examples: vec![example(
                        "営業部の4月分が未入力",
                        "5月1日の0時になる",
                        "締めは実行されず、未入力部門の一覧が管理者に通知される",
                    )],
                },
            ],
            questions: Questions {
                blocker: strings(&["締め実行の最終承認者は必要か?"]),
                clarification: strings(&["「締め」の対象は予算のみか、実績も含むか?"]),
                future: strings(&["四半期締め・年次締めも同じ仕組みに載せるか?"]),
            },
            next_actions: strings(&["現行の手作業手順を経理チームにヒアリングする"]),
            metadata: None,
        },
    }
}

fn split_index(len: usize, ratio: f64) -> Result<usize, Error> {
    if !(ratio > 0.0 && ratio < 1.0) {
        return Err(Error::InvalidRatio(ratio));
    }
    Ok((len as f64 * ratio).floor() as usize)
}

/// Deterministic partition: original order, sliced at `floor(n * ratio)`.
/// The validation side receives any remainder.
pub fn split_fixed<T: Clone>(examples: &[T], ratio: f64) -> Result<Dataset<T>, Error> {
    let index = split_index(examples.len(), ratio)?;
    Ok(Dataset {
        train: examples[..index].to_vec(),
        validation: examples[index..].to_vec(),
    })
}

/// Shuffled partition. With `seed: None` the shuffle draws from OS
/// entropy and is not reproducible across runs; pass a seed to pin it.
pub fn split_random<T: Clone>(
    examples: &[T],
    ratio: f64,
    seed: Option<u64>,
) -> Result<Dataset<T>, Error> {
    let index = split_index(examples.len(), ratio)?;

    let mut shuffled = examples.to_vec();
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    shuffled.shuffle(&mut rng);

    Ok(Dataset {
        train: shuffled[..index].to_vec(),
        validation: shuffled[index..].to_vec(),
    })
}
