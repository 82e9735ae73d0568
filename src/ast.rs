use std::{fmt, mem};

/// Precedence tier of a binary operator.
///
/// Operators of the `High` tier (`*`, `/`) are collapsed before any operator
/// of the `Low` tier (`+`, `-`). Within a tier, operators associate to the
/// left.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Addition and subtraction.
    Low,
    /// Multiplication and division.
    High,
}

/// Represents a binary operator.
///
/// The four arithmetic operators are the only operators the engine knows.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// The operator table, in symbol order `+ - * /`.
pub const OPERATORS: [BinaryOperator; 4] = [BinaryOperator::Add,
                                             BinaryOperator::Sub,
                                             BinaryOperator::Mul,
                                             BinaryOperator::Div];

impl BinaryOperator {
    /// Looks up the operator written as `symbol`.
    ///
    /// # Example
    /// ```
    /// use calculus::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol('/'), Some(BinaryOperator::Div));
    /// assert_eq!(BinaryOperator::from_symbol('^'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// The character this operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// The precedence tier this operator belongs to.
    #[must_use]
    pub const fn precedence(self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Low,
            Self::Mul | Self::Div => Precedence::High,
        }
    }

    /// Returns `true` for `*` and `/`.
    #[must_use]
    pub const fn is_high_tier(self) -> bool {
        matches!(self.precedence(), Precedence::High)
    }

    /// Applies the operator in IEEE-754 double precision.
    ///
    /// Division by zero is not special-cased here: `1 / 0` is `inf` and
    /// `0 / 0` is `NaN`. Callers that want an error check the divisor first.
    ///
    /// # Example
    /// ```
    /// use calculus::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Sub.apply(5.0, 7.5), -2.5);
    /// assert!(BinaryOperator::Div.apply(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Parentheses do not survive parsing: grouping is encoded in the shape of
/// the tree. Every `BinaryOp` already reflects precedence and left
/// associativity, so evaluation is a plain post-order fold.
///
/// A flat run such as `1+1+...+1` becomes a left spine with one node per
/// operator, so trees can be arbitrarily deep. Rendering, comparison, depth
/// and drop walk the tree with an explicit stack and never recurse.
#[derive(Debug, Clone)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The literal value.
        value: f64,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a literal node.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number { value }
    }

    /// Builds a binary node from two operands.
    ///
    /// # Example
    /// ```
    /// use calculus::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(Expr::number(1.0), BinaryOperator::Add, Expr::number(2.0));
    /// assert_eq!(expr.to_string(), "(1 + 2)");
    /// ```
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Number of operator nodes between the root and the deepest leaf.
    ///
    /// # Example
    /// ```
    /// let tree = calculus::parse("1 + 2 * 3").unwrap();
    /// assert_eq!(tree.depth(), 2);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0)];

        while let Some((node, level)) = stack.pop() {
            match node {
                Self::Number { .. } => deepest = deepest.max(level),
                Self::BinaryOp { left, right, .. } => {
                    stack.push((&**left, level + 1));
                    stack.push((&**right, level + 1));
                },
            }
        }

        deepest
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];

        while let Some(pair) = pairs.pop() {
            match pair {
                (Self::Number { value: a }, Self::Number { value: b }) => {
                    if a != b {
                        return false;
                    }
                },
                (Self::BinaryOp { left: l1,
                                  op: op1,
                                  right: r1, },
                 Self::BinaryOp { left: l2,
                                  op: op2,
                                  right: r2, }) => {
                    if op1 != op2 {
                        return false;
                    }
                    pairs.push((&**r1, &**r2));
                    pairs.push((&**l1, &**l2));
                },
                _ => return false,
            }
        }

        true
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut detached = Vec::new();
        detach_children(self, &mut detached);

        // Every node is emptied before it goes out of scope, so each drop
        // below is shallow.
        while let Some(mut node) = detached.pop() {
            detach_children(&mut node, &mut detached);
        }
    }
}

/// Moves the operands of `node` onto `detached`, leaving placeholder leaves.
fn detach_children(node: &mut Expr, detached: &mut Vec<Expr>) {
    if let Expr::BinaryOp { left, right, .. } = node {
        detached.push(mem::replace(&mut **left, Expr::number(0.0)));
        detached.push(mem::replace(&mut **right, Expr::number(0.0)));
    }
}

/// One step of rendering a tree.
enum Piece<'a> {
    Node(&'a Expr),
    Operator(BinaryOperator),
    Close,
}

impl fmt::Display for Expr {
    /// Renders the tree fully parenthesized, e.g. `((1 + 2) * 3)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pieces = vec![Piece::Node(self)];

        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Node(Self::Number { value }) => write!(f, "{value}")?,
                Piece::Node(Self::BinaryOp { left, op, right }) => {
                    f.write_str("(")?;
                    pieces.push(Piece::Close);
                    pieces.push(Piece::Node(right));
                    pieces.push(Piece::Operator(*op));
                    pieces.push(Piece::Node(left));
                },
                Piece::Operator(op) => write!(f, " {op} ")?,
                Piece::Close => f.write_str(")")?,
            }
        }

        Ok(())
    }
}
