//! Cosine similarity and the pairwise candidate matrix.
//!
//! The pairwise matrix is square and symmetric, with the diagonal
//! *structurally* masked: a candidate's self-similarity is meaningless
//! for diversity scoring, so accessors skip `i == j` instead of storing
//! a NaN marker. Column statistics therefore never see the diagonal.

/// Cosine similarity of two equal-length vectors.
///
/// Returns 0.0 when either vector has zero norm. Zero rows are filtered
/// out before the similarity engine runs, so this only matters for a
/// zero document embedding.
pub fn cosine(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a <= 0.0 || norm_b <= 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Cosine similarity of every embedding row against the document
/// embedding, in row order.
pub fn doc_similarities(embeddings: &[Vec<f64>], doc_embedding: &[f64]) -> Vec<f64> {
    embeddings
        .iter()
        .map(|row| cosine(row, doc_embedding))
        .collect()
}

/// Pairwise cosine similarity matrix with a masked diagonal.
///
/// Stored row-major; `get(i, j)` returns `None` on the diagonal so no
/// reduction can accidentally include a self-similarity.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    n: usize,
    data: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compute the pairwise matrix for the given embedding rows.
    ///
    /// Each off-diagonal entry is computed once and mirrored; diagonal
    /// slots hold 0.0 but are unreachable through the accessors.
    pub fn pairwise(embeddings: &[Vec<f64>]) -> Self {
        let n = embeddings.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let sim = cosine(&embeddings[i], &embeddings[j]);
                data[i * n + j] = sim;
                data[j * n + i] = sim;
            }
        }
        Self { n, data }
    }

    /// Number of candidates (matrix side length).
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Similarity between two distinct candidates; `None` on the diagonal.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i == j {
            None
        } else {
            Some(self.data[i * self.n + j])
        }
    }

    /// Off-diagonal entries of row `i` as `(column, similarity)` pairs,
    /// in ascending column order.
    pub fn row(&self, i: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let n = self.n;
        (0..n).filter(move |&j| j != i).map(move |j| (j, self.data[i * n + j]))
    }

    /// Off-diagonal entries of column `j`, in ascending row order.
    /// The iterator is `Clone` so column statistics can make several
    /// passes without materializing the column.
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + Clone + '_ {
        let n = self.n;
        (0..n).filter(move |&i| i != j).map(move |i| self.data[i * n + j])
    }
}
