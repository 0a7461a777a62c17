//! Описание пайплайнов препроцессинга
//!
//! Пайплайн здесь только шаблон: упорядоченный список именованных шагов с
//! параметрами. Обучение (fit) и применение (transform) делает вызывающий код
//! внешней численной библиотекой.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PowerMethod {
    YeoJohnson,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PowerTransformer {
    pub method: PowerMethod,
    pub standardize: bool,
}

impl PowerTransformer {
    /// Yeo-Johnson без внутренней стандартизации (ей занимается scaler)
    pub fn yeo_johnson() -> Self {
        Self {
            method: PowerMethod::YeoJohnson,
            standardize: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ColumnOp {
    PowerTransform(PowerTransformer),
    Passthrough,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnTransform {
    pub name: String,
    pub op: ColumnOp,
    pub columns: Vec<String>,
}

/// Применяет разные операции к разным подмножествам колонок.
/// Колонки, не попавшие ни в один список, отбрасываются.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnTransformer {
    pub transformers: Vec<ColumnTransform>,
}

impl ColumnTransformer {
    pub fn feature_names_out(&self) -> Vec<String> {
        self.transformers
            .iter()
            .flat_map(|t| t.columns.iter().map(move |c| format!("{}__{}", t.name, c)))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PolynomialFeatures {
    pub degree: u32,
    pub interaction_only: bool,
    pub include_bias: bool,
}

impl PolynomialFeatures {
    pub fn feature_names_out(&self, input: &[String]) -> Vec<String> {
        let mut names = Vec::new();
        if self.include_bias {
            names.push("1".to_string());
        }

        for degree in 1..=self.degree as usize {
            let mut terms = Vec::new();
            combinations(
                input.len(),
                degree,
                0,
                !self.interaction_only,
                &mut Vec::with_capacity(degree),
                &mut terms,
            );
            names.extend(terms.iter().map(|term| term_name(input, term)));
        }

        names
    }
}

// Индексы в неубывающем порядке, как itertools::combinations(_with_replacement)
fn combinations(
    n: usize,
    k: usize,
    start: usize,
    with_replacement: bool,
    current: &mut Vec<usize>,
    out: &mut Vec<Vec<usize>>,
) {
    if current.len() == k {
        out.push(current.clone());
        return;
    }

    for i in start..n {
        current.push(i);
        let next = if with_replacement { i } else { i + 1 };
        combinations(n, k, next, with_replacement, current, out);
        current.pop();
    }
}

fn term_name(input: &[String], term: &[usize]) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut idx = 0;
    while idx < term.len() {
        let feature = term[idx];
        let power = term[idx..].iter().take_while(|&&f| f == feature).count();
        if power == 1 {
            parts.push(input[feature].clone());
        } else {
            parts.push(format!("{}^{}", input[feature], power));
        }
        idx += power;
    }
    parts.join(" ")
}

/// Нулевое среднее, единичная дисперсия
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StandardScaler {
    pub with_mean: bool,
    pub with_std: bool,
}

impl Default for StandardScaler {
    fn default() -> Self {
        Self {
            with_mean: true,
            with_std: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MinMaxScaler {
    pub feature_range: (f64, f64),
}

impl Default for MinMaxScaler {
    fn default() -> Self {
        Self {
            feature_range: (0.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Stage {
    Columns(ColumnTransformer),
    Polynomial(PolynomialFeatures),
    StandardScaler(StandardScaler),
    MinMaxScaler(MinMaxScaler),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub name: String,
    pub stage: Stage,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Pipeline {
    steps: Vec<Step>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(mut self, name: impl Into<String>, stage: Stage) -> Self {
        self.steps.push(Step {
            name: name.into(),
            stage,
        });
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn stage(&self, name: &str) -> Option<&Stage> {
        self.steps.iter().find(|s| s.name == name).map(|s| &s.stage)
    }

    pub fn final_stage(&self) -> Option<&Stage> {
        self.steps.last().map(|s| &s.stage)
    }

    pub fn polynomial(&self) -> Option<&PolynomialFeatures> {
        self.steps.iter().find_map(|s| match &s.stage {
            Stage::Polynomial(poly) => Some(poly),
            _ => None,
        })
    }

    /// Имена колонок на выходе обученного пайплайна.
    ///
    /// Пустой список, пока перед полиномом или скейлером нет column transform.
    pub fn feature_names_out(&self) -> Vec<String> {
        let mut names = Vec::new();
        for step in &self.steps {
            match &step.stage {
                Stage::Columns(columns) => names = columns.feature_names_out(),
                Stage::Polynomial(poly) => names = poly.feature_names_out(&names),
                // скейлеры сохраняют колонки
                Stage::StandardScaler(_) | Stage::MinMaxScaler(_) => {}
            }
        }
        names
    }

    pub fn n_features_out(&self) -> usize {
        self.feature_names_out().len()
    }
}

/// Результат билдера: пайплайн или явный маркер "данные без изменений"
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Preprocessor {
    Pipeline(Pipeline),
    Passthrough,
}

impl Preprocessor {
    pub fn is_passthrough(&self) -> bool {
        matches!(self, Preprocessor::Passthrough)
    }

    pub fn as_pipeline(&self) -> Option<&Pipeline> {
        match self {
            Preprocessor::Pipeline(pipeline) => Some(pipeline),
            Preprocessor::Passthrough => None,
        }
    }

    pub fn into_pipeline(self) -> Option<Pipeline> {
        match self {
            Preprocessor::Pipeline(pipeline) => Some(pipeline),
            Preprocessor::Passthrough => None,
        }
    }
}

impl From<Pipeline> for Preprocessor {
    fn from(pipeline: Pipeline) -> Self {
        Preprocessor::Pipeline(pipeline)
    }
}
